//! Unit tests for sc-coord.

#[cfg(test)]
mod helpers {
    use sc_agent::AgentSnapshot;
    use sc_core::{ScoringWeights, Vec3, World, WorldBuilder};

    use crate::Coordinator;

    /// Full energy, facing `+z`.
    pub fn snap(position: Vec3) -> AgentSnapshot {
        AgentSnapshot { position, heading: Vec3::Z, energy: 100.0, max_energy: 100.0 }
    }

    pub fn world_with_targets(points: &[Vec3]) -> World {
        let mut b = WorldBuilder::new();
        for &p in points {
            b.add_target(p);
        }
        b.build()
    }

    pub fn coordinator(points: &[Vec3]) -> Coordinator {
        Coordinator::from_world(&world_with_targets(points), ScoringWeights::default())
    }
}

#[cfg(test)]
mod scoring {
    use sc_agent::AgentSnapshot;
    use sc_core::{ScoringWeights, Vec3};

    use super::helpers::snap;
    use crate::score;

    #[test]
    fn straight_ahead_at_full_energy() {
        let s = score(&snap(Vec3::ZERO), Vec3::new(0.0, 0.0, 4.0), &ScoringWeights::default());
        assert!((s - 6.0).abs() < 1e-5, "score {s}");
    }

    #[test]
    fn angle_penalty_is_per_degree() {
        // 90° off-heading at distance 3: -3 + 10 - 9.
        let s = score(&snap(Vec3::ZERO), Vec3::new(3.0, 0.0, 0.0), &ScoringWeights::default());
        assert!((s - -2.0).abs() < 1e-4, "score {s}");
    }

    #[test]
    fn non_positive_max_energy_drops_energy_term() {
        let agent = AgentSnapshot {
            position:   Vec3::ZERO,
            heading:    Vec3::Z,
            energy:     5.0,
            max_energy: 0.0,
        };
        let s = score(&agent, Vec3::new(0.0, 0.0, 2.0), &ScoringWeights::default());
        assert!((s - -2.0).abs() < 1e-5, "score {s}");
    }

    #[test]
    fn target_on_agent_has_no_angle_penalty() {
        let s = score(&snap(Vec3::ONE), Vec3::ONE, &ScoringWeights::default());
        assert!((s - 10.0).abs() < 1e-5, "score {s}");
    }
}

#[cfg(test)]
mod table {
    use sc_core::{AgentId, TargetId};

    use crate::{AssignmentTable, CoordError};

    #[test]
    fn insert_replaces_previous_entry() {
        let mut t = AssignmentTable::new();
        assert_eq!(t.insert(AgentId(0), TargetId(1)), None);
        assert_eq!(t.insert(AgentId(0), TargetId(2)), Some(TargetId(1)));
        assert!(!t.is_taken(TargetId(1)));
        assert_eq!(t.holder(TargetId(2)), Some(AgentId(0)));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn remove_clears_reverse_entry() {
        let mut t = AssignmentTable::new();
        t.insert(AgentId(3), TargetId(0));
        assert_eq!(t.remove(AgentId(3)), Some(TargetId(0)));
        assert_eq!(t.remove(AgentId(3)), None);
        assert!(t.holders(TargetId(0)).is_empty());
        assert!(t.is_empty());
    }

    #[test]
    fn double_holder_is_reported() {
        let mut t = AssignmentTable::new();
        t.insert(AgentId(4), TargetId(7));
        t.insert(AgentId(1), TargetId(7));
        assert_eq!(t.holders(TargetId(7)), &[AgentId(1), AgentId(4)]);
        match t.check_invariants() {
            Err(CoordError::InvariantViolation { target, holders }) => {
                assert_eq!(target, TargetId(7));
                assert_eq!(holders, vec![AgentId(1), AgentId(4)]);
            }
            other => panic!("expected violation, got {other:?}"),
        }
    }

    #[test]
    fn iter_is_ascending_by_agent() {
        let mut t = AssignmentTable::new();
        t.insert(AgentId(5), TargetId(0));
        t.insert(AgentId(2), TargetId(1));
        let pairs: Vec<_> = t.iter().collect();
        assert_eq!(pairs, vec![(AgentId(2), TargetId(1)), (AgentId(5), TargetId(0))]);
    }
}

#[cfg(test)]
mod coordinator {
    use sc_core::{AgentId, TargetId, Vec3};

    use super::helpers::{coordinator, snap};
    use crate::CoordError;

    #[test]
    fn picks_closest_straight_ahead_target() {
        let c = coordinator(&[
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, 5.0),
        ]);
        let got = c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap();
        assert_eq!(got, Some(TargetId(1)));
        assert_eq!(c.assignment_of(AgentId(0)), Some(TargetId(1)));
        assert_eq!(c.holder_of(TargetId(1)), Some(AgentId(0)));
    }

    #[test]
    fn heading_outweighs_small_distance_gap() {
        // Behind at 5 units loses 18 points to the angle term.
        let c = coordinator(&[Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 10.0)]);
        let got = c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap();
        assert_eq!(got, Some(TargetId(1)));
    }

    #[test]
    fn ties_keep_first_target() {
        let c = coordinator(&[Vec3::new(3.0, 0.0, 0.0), Vec3::new(-3.0, 0.0, 0.0)]);
        let got = c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap();
        assert_eq!(got, Some(TargetId(0)));
    }

    #[test]
    fn deterministic_for_identical_state() {
        let points = [Vec3::new(1.0, 0.0, 7.0), Vec3::new(-4.0, 0.0, 3.0), Vec3::new(6.0, 0.0, 6.0)];
        let a = coordinator(&points);
        let b = coordinator(&points);
        for i in 0..3 {
            let p = Vec3::new(i as f32, 0.0, 0.0);
            assert_eq!(
                a.request_assignment(AgentId(i), &snap(p)).unwrap(),
                b.request_assignment(AgentId(i), &snap(p)).unwrap(),
            );
        }
    }

    #[test]
    fn no_free_target_leaves_table_unchanged() {
        let c = coordinator(&[Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 2.0)]);
        c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap();
        c.request_assignment(AgentId(1), &snap(Vec3::ZERO)).unwrap();
        let before: Vec<_> = c.snapshot().iter().collect();

        assert_eq!(c.request_assignment(AgentId(2), &snap(Vec3::ZERO)).unwrap(), None);
        // An agent's own target is not a candidate for a fresh request.
        assert_eq!(c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap(), None);

        let after: Vec<_> = c.snapshot().iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_target_list_is_not_an_error() {
        let c = coordinator(&[]);
        assert_eq!(c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap(), None);
        assert_eq!(c.assigned_count(), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let c = coordinator(&[Vec3::new(0.0, 0.0, 1.0)]);
        c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap();
        assert_eq!(c.release(AgentId(0)).unwrap(), Some(TargetId(0)));
        assert_eq!(c.release(AgentId(0)).unwrap(), None);
        assert_eq!(c.assignment_of(AgentId(0)), None);
        assert_eq!(c.holder_of(TargetId(0)), None);
    }

    #[test]
    fn unknown_agent_release_is_noop() {
        let c = coordinator(&[Vec3::ZERO]);
        assert_eq!(c.release(AgentId(42)).unwrap(), None);
    }

    #[test]
    fn invalid_agent_fails_fast() {
        let c = coordinator(&[Vec3::ZERO]);
        assert!(matches!(
            c.request_assignment(AgentId::INVALID, &snap(Vec3::ZERO)),
            Err(CoordError::InvalidAgent(_))
        ));
        assert!(matches!(c.release(AgentId::INVALID), Err(CoordError::InvalidAgent(_))));
        assert_eq!(c.assigned_count(), 0);
    }

    #[test]
    fn reassign_can_return_the_same_target() {
        let c = coordinator(&[Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 9.0)]);
        c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap();
        assert_eq!(c.reassign(AgentId(0), &snap(Vec3::ZERO)).unwrap(), Some(TargetId(0)));
        assert_eq!(c.assigned_count(), 1);
    }

    #[test]
    fn clear_empties_table() {
        let c = coordinator(&[Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 2.0)]);
        c.request_assignment(AgentId(0), &snap(Vec3::ZERO)).unwrap();
        c.request_assignment(AgentId(1), &snap(Vec3::ZERO)).unwrap();
        c.clear_assignments();
        assert_eq!(c.assigned_count(), 0);
        assert!(c.snapshot().is_empty());
    }

    #[test]
    fn forced_double_assignment_breaks_invariants() {
        let c = coordinator(&[Vec3::ZERO]);
        c.force_assign(AgentId(0), TargetId(0));
        assert!(c.check_invariants().is_ok());
        c.force_assign(AgentId(1), TargetId(0));
        assert!(matches!(c.check_invariants(), Err(CoordError::InvariantViolation { .. })));
    }

    #[test]
    fn unknown_target_is_reported() {
        let c = coordinator(&[Vec3::ZERO]);
        c.force_assign(AgentId(0), TargetId(9));
        assert!(matches!(c.check_invariants(), Err(CoordError::UnknownTarget(TargetId(9)))));
    }
}

#[cfg(test)]
mod concurrency {
    use std::collections::HashSet;
    use std::sync::Barrier;

    use sc_core::{AgentId, Vec3};

    use super::helpers::{coordinator, snap};

    #[test]
    fn simultaneous_requests_never_share_a_target() {
        const AGENTS: u32 = 12;
        let c = coordinator(&[
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 4.0),
        ]);
        let barrier = Barrier::new(AGENTS as usize);

        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..AGENTS)
                .map(|i| {
                    let (c, barrier) = (&c, &barrier);
                    s.spawn(move || {
                        barrier.wait();
                        c.request_assignment(AgentId(i), &snap(Vec3::ZERO)).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let won: Vec<_> = results.into_iter().flatten().collect();
        assert_eq!(won.len(), 4);
        assert_eq!(won.iter().collect::<HashSet<_>>().len(), 4);
        assert!(c.check_invariants().is_ok());
    }
}

#[cfg(test)]
mod conflict {
    use sc_agent::{AgentStore, AgentStoreBuilder};
    use sc_core::{AgentId, CoordinationConfig, TargetId, Tick, Vec3};
    use sc_spatial::CommLink;

    use super::helpers::coordinator;
    use crate::{ConflictMonitor, Reassignment};

    fn two_agents(gap: f32) -> AgentStore {
        AgentStoreBuilder::new(2, 0)
            .positions(vec![Vec3::ZERO, Vec3::new(gap, 0.0, 0.0)])
            .build()
            .0
    }

    fn monitor(cooldown: u64) -> ConflictMonitor {
        ConflictMonitor::new(&CoordinationConfig {
            reassign_cooldown_ticks: cooldown,
            ..CoordinationConfig::default()
        })
    }

    #[test]
    fn in_range_double_holder_is_resolved() {
        let agents = two_agents(3.0);
        let c = coordinator(&[Vec3::new(0.0, 0.0, 5.0), Vec3::new(20.0, 0.0, 20.0)]);
        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(0));

        let report = monitor(0).tick(Tick(0), &agents, &c).unwrap();

        assert_eq!(report.links, vec![CommLink { a: AgentId(0), b: AgentId(1) }]);
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.conflicts[0].holders, vec![AgentId(0), AgentId(1)]);
        assert_eq!(
            report.reassignments,
            vec![Reassignment { agent: AgentId(0), old: TargetId(0), new: Some(TargetId(1)) }]
        );
        assert_eq!(c.holder_of(TargetId(0)), Some(AgentId(1)));
        assert!(c.check_invariants().is_ok());
    }

    #[test]
    fn loser_gets_none_when_nothing_is_free() {
        let agents = two_agents(3.0);
        let c = coordinator(&[Vec3::new(0.0, 0.0, 5.0)]);
        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(0));

        let report = monitor(0).tick(Tick(0), &agents, &c).unwrap();

        assert_eq!(report.reassignments[0].new, None);
        assert_eq!(c.assignment_of(AgentId(0)), None);
        assert_eq!(c.assignment_of(AgentId(1)), Some(TargetId(0)));
        assert!(c.check_invariants().is_ok());
    }

    #[test]
    fn out_of_range_agents_are_not_arbitrated() {
        let agents = two_agents(50.0);
        let c = coordinator(&[Vec3::ZERO, Vec3::X]);
        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(0));

        let report = monitor(0).tick(Tick(0), &agents, &c).unwrap();

        assert!(report.links.is_empty());
        assert!(report.conflicts.is_empty());
        assert!(report.reassignments.is_empty());
        assert!(c.check_invariants().is_err());
    }

    #[test]
    fn boundary_distance_is_in_range() {
        let agents = two_agents(10.0);
        let c = coordinator(&[Vec3::ZERO, Vec3::X]);
        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(0));

        let report = monitor(0).tick(Tick(0), &agents, &c).unwrap();
        assert_eq!(report.reassignments.len(), 1);
    }

    #[test]
    fn consistent_table_yields_no_conflicts() {
        let agents = two_agents(1.0);
        let c = coordinator(&[Vec3::ZERO, Vec3::X]);
        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(1));

        let report = monitor(0).tick(Tick(0), &agents, &c).unwrap();
        assert_eq!(report.links.len(), 1);
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn cooldown_defers_repeat_reassignment() {
        let agents = two_agents(3.0);
        let c = coordinator(&[Vec3::new(0.0, 0.0, 5.0), Vec3::new(20.0, 0.0, 20.0)]);
        let mut m = monitor(5);

        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(0));
        let r0 = m.tick(Tick(0), &agents, &c).unwrap();
        assert_eq!(r0.reassignments[0].agent, AgentId(0));

        // Agent 0 is cooling down, so agent 1 gives way instead.
        c.force_assign(AgentId(0), TargetId(0));
        let r1 = m.tick(Tick(1), &agents, &c).unwrap();
        assert_eq!(r1.conflicts.len(), 2);
        assert_eq!(
            r1.reassignments,
            vec![Reassignment { agent: AgentId(1), old: TargetId(0), new: Some(TargetId(1)) }]
        );

        // Cooldown over for agent 0 at tick 5.
        c.force_assign(AgentId(1), TargetId(0));
        let r5 = m.tick(Tick(5), &agents, &c).unwrap();
        assert_eq!(r5.reassignments[0].agent, AgentId(0));
        assert!(c.check_invariants().is_ok());
    }

    #[test]
    fn reset_clears_cooldown() {
        let agents = two_agents(3.0);
        let c = coordinator(&[Vec3::new(0.0, 0.0, 5.0), Vec3::new(20.0, 0.0, 20.0)]);
        let mut m = monitor(100);

        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(0));
        m.tick(Tick(0), &agents, &c).unwrap();

        m.reset();
        c.clear_assignments();
        c.force_assign(AgentId(0), TargetId(0));
        c.force_assign(AgentId(1), TargetId(0));
        let r = m.tick(Tick(1), &agents, &c).unwrap();
        assert_eq!(r.reassignments[0].agent, AgentId(0));
    }
}

#[cfg(test)]
mod resources {
    use sc_claim::ClaimRegistry;
    use sc_core::{ResourceId, Vec3, WorldBuilder};

    use crate::ResourceFinder;

    fn finder(candidates: usize) -> ResourceFinder {
        let mut b = WorldBuilder::new();
        for x in [4.0, 1.0, 3.0, 2.0] {
            b.add_resource(Vec3::new(x, 0.0, 0.0));
        }
        ResourceFinder::new(&b.build().resources, candidates)
    }

    #[test]
    fn claims_in_distance_order() {
        let f = finder(3);
        let reg = ClaimRegistry::new();
        let order: Vec<_> = (0..4)
            .map(|_| f.claim_nearest(&reg, Vec3::ZERO, |_| true))
            .collect();
        assert_eq!(
            order,
            vec![Some(ResourceId(1)), Some(ResourceId(3)), Some(ResourceId(2)), Some(ResourceId(0))]
        );
        assert_eq!(f.claim_nearest(&reg, Vec3::ZERO, |_| true), None);
        assert_eq!(reg.claimed_count(), 4);
    }

    #[test]
    fn skips_claimed_and_filtered() {
        let f = finder(3);
        let reg = ClaimRegistry::new();
        assert!(reg.try_claim(ResourceId(1)));
        let got = f.claim_nearest(&reg, Vec3::ZERO, |r| r != ResourceId(3));
        assert_eq!(got, Some(ResourceId(2)));
    }

    #[test]
    fn zero_candidates_never_claims() {
        let f = finder(0);
        let reg = ClaimRegistry::new();
        assert_eq!(f.claim_nearest(&reg, Vec3::ZERO, |_| true), None);
        assert_eq!(reg.claimed_count(), 0);
    }

    #[test]
    fn nearest_ignores_claims() {
        let f = finder(3);
        assert_eq!(f.len(), 4);
        assert_eq!(f.nearest(Vec3::new(2.9, 0.0, 0.0)), Some(ResourceId(2)));
    }
}
