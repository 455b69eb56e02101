//! Destinations and the world description handed to the coordination layer.
//!
//! A [`World`] is built once, after the surrounding scene has placed every
//! target and resource, and then passed by value (or reference) to whoever
//! needs it.  Ids are dense: `TargetId(n)` is `targets[n]`.

use crate::{CoreError, CoreResult, ResourceId, TargetId, Vec3};

/// Either kind of place an agent may travel to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Destination {
    Target(TargetId),
    Resource(ResourceId),
}

/// A singly-ownable destination.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id:       TargetId,
    pub position: Vec3,
}

/// A recyclable destination guarded by the claim registry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub id:       ResourceId,
    pub position: Vec3,
}

/// Every destination known to a scenario.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    pub targets:   Vec<Target>,
    pub resources: Vec<Resource>,
}

impl World {
    /// A world with no destinations.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn target(&self, id: TargetId) -> CoreResult<&Target> {
        self.targets.get(id.index()).ok_or(CoreError::TargetNotFound(id))
    }

    pub fn resource(&self, id: ResourceId) -> CoreResult<&Resource> {
        self.resources.get(id.index()).ok_or(CoreError::ResourceNotFound(id))
    }

    /// Position of either kind of destination.
    pub fn position_of(&self, dest: Destination) -> CoreResult<Vec3> {
        match dest {
            Destination::Target(id)   => self.target(id).map(|t| t.position),
            Destination::Resource(id) => self.resource(id).map(|r| r.position),
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

/// Incrementally construct a [`World`], handing out sequential ids.
///
/// ```
/// use sc_core::{Vec3, WorldBuilder};
///
/// let mut b = WorldBuilder::new();
/// let t = b.add_target(Vec3::new(5.0, 0.0, 5.0));
/// let r = b.add_resource(Vec3::new(-3.0, 0.0, 1.0));
/// let world = b.build();
/// assert_eq!(world.target(t).unwrap().position.x, 5.0);
/// assert_eq!(world.resource(r).unwrap().position.x, -3.0);
/// ```
#[derive(Default)]
pub struct WorldBuilder {
    targets:   Vec<Target>,
    resources: Vec<Resource>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_target(&mut self, position: Vec3) -> TargetId {
        let id = TargetId(self.targets.len() as u32);
        self.targets.push(Target { id, position });
        id
    }

    pub fn add_resource(&mut self, position: Vec3) -> ResourceId {
        let id = ResourceId(self.resources.len() as u32);
        self.resources.push(Resource { id, position });
        id
    }

    pub fn build(self) -> World {
        World { targets: self.targets, resources: self.resources }
    }
}
