//! `ClaimRegistry`: atomic test-and-set over resource claim flags.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use sc_core::ResourceId;

/// Thread-safe map from resource to a claimed flag.
///
/// A missing key means "unclaimed".  Keys are created on the first claim
/// attempt and are never removed; [`reset_all`](Self::reset_all) only clears
/// the flags.
#[derive(Default)]
pub struct ClaimRegistry {
    flags: Mutex<HashMap<ResourceId, bool>>,
}

impl ClaimRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test-and-set the claim flag for `resource`.
    ///
    /// Returns `true` iff the flag was clear and is now set.  Unknown
    /// resources are registered as unclaimed first.  `ResourceId::INVALID`
    /// is never claimable.
    pub fn try_claim(&self, resource: ResourceId) -> bool {
        if !resource.is_valid() {
            warn!(%resource, "claim attempt on invalid resource id");
            return false;
        }
        let mut flags = self.flags.lock();
        let flag = flags.entry(resource).or_insert(false);
        if *flag {
            return false;
        }
        *flag = true;
        trace!(%resource, "claimed");
        true
    }

    pub fn is_claimed(&self, resource: ResourceId) -> bool {
        self.flags.lock().get(&resource).copied().unwrap_or(false)
    }

    /// Clear the flag for `resource`.  No-op for unknown or unclaimed ids.
    pub fn release(&self, resource: ResourceId) {
        if let Some(flag) = self.flags.lock().get_mut(&resource) {
            if *flag {
                trace!(%resource, "released");
            }
            *flag = false;
        }
    }

    /// Clear every flag, keeping the keys.  Used at scenario boundaries.
    pub fn reset_all(&self) {
        let mut flags = self.flags.lock();
        let mut cleared = 0usize;
        for flag in flags.values_mut() {
            cleared += *flag as usize;
            *flag = false;
        }
        debug!(cleared, known = flags.len(), "claim registry reset");
    }

    /// Number of resources currently claimed.
    pub fn claimed_count(&self) -> usize {
        self.flags.lock().values().filter(|&&f| f).count()
    }

    /// Number of resources that have ever been seen by `try_claim`.
    pub fn known_count(&self) -> usize {
        self.flags.lock().len()
    }
}
