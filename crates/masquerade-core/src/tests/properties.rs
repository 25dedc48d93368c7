//! Property tests over randomly assembled worlds.

use proptest::prelude::*;

use masquerade_world::{Actor, ComponentKind, EntityId, Identity, LifeStage, World};

use crate::identity::{self, IdentityResolver};

const NAMES: [&str; 3] = ["Bob", "Jane", "Alice"];
const USERNAMES: [&str; 2] = ["bob123", "xX_jane_Xx"];

/// Dangling slot targets start here, well past any spawned id.
const DANGLING_BASE: u64 = 1_000;

#[derive(Debug, Clone)]
struct EntityPlan {
    name: &'static str,
    stage: LifeStage,
    has_meta: bool,
    ghost: bool,
    username: Option<&'static str>,
    /// `None`: no identity component. `Some(None)`: empty slot.
    /// `Some(Some(i))`: slot points at entity `i`, or a dangling id if `i`
    /// is out of range.
    identity: Option<Option<usize>>,
}

fn arb_entity() -> impl Strategy<Value = EntityPlan> {
    (
        prop::sample::select(NAMES.to_vec()),
        prop::sample::select(LifeStage::ALL.to_vec()),
        prop::bool::weighted(0.9),
        any::<bool>(),
        prop::option::of(prop::sample::select(USERNAMES.to_vec())),
        prop::option::of(prop::option::of(0usize..10)),
    )
        .prop_map(|(name, stage, has_meta, ghost, username, identity)| EntityPlan {
            name,
            stage,
            has_meta,
            ghost,
            username,
            identity,
        })
}

fn arb_world() -> impl Strategy<Value = Vec<EntityPlan>> {
    prop::collection::vec(arb_entity(), 1..8)
}

fn slot_target(ids: &[EntityId], index: usize) -> EntityId {
    ids.get(index)
        .copied()
        .unwrap_or_else(|| EntityId::new(DANGLING_BASE + index as u64))
}

fn build_world(plans: &[EntityPlan]) -> (World, Vec<EntityId>) {
    let mut world = World::new();
    let ids: Vec<_> = plans
        .iter()
        .map(|plan| world.spawn_at_stage(plan.name, plan.stage))
        .collect();

    for (plan, &id) in plans.iter().zip(&ids) {
        match plan.identity {
            Some(Some(index)) => {
                world
                    .insert_identity(id, Identity::wearing(slot_target(&ids, index)))
                    .unwrap();
            }
            Some(None) => world.insert_identity(id, Identity::empty()).unwrap(),
            None => {}
        }
        if plan.ghost {
            world.insert_ghost(id).unwrap();
        }
        if let Some(username) = plan.username {
            world.insert_actor(id, Actor::new(username)).unwrap();
        }
        if !plan.has_meta {
            world.remove_component(id, ComponentKind::MetaData).unwrap();
        }
    }

    (world, ids)
}

fn viewers(ids: &[EntityId]) -> Vec<Option<EntityId>> {
    let mut viewers = vec![None, Some(EntityId::INVALID), Some(EntityId::new(DANGLING_BASE - 1))];
    viewers.extend(ids.iter().copied().map(Some));
    viewers
}

proptest! {
    #[test]
    fn name_is_rendered_resolution(plans in arb_world()) {
        let (world, ids) = build_world(&plans);
        let resolver = IdentityResolver::default();

        for &subject in &ids {
            for viewer in viewers(&ids) {
                prop_assert_eq!(
                    resolver.name(subject, &world, viewer),
                    resolver.resolve(subject, &world, viewer).to_string()
                );
            }
        }
    }

    #[test]
    fn metadata_less_subject_is_unnamed(plans in arb_world()) {
        let (world, ids) = build_world(&plans);

        for (plan, &subject) in plans.iter().zip(&ids) {
            if plan.has_meta {
                continue;
            }
            for viewer in viewers(&ids) {
                prop_assert_eq!(identity::name(subject, &world, viewer), "");
            }
        }
    }

    #[test]
    fn initializing_subject_shows_raw_name(plans in arb_world()) {
        let (world, ids) = build_world(&plans);

        for (plan, &subject) in plans.iter().zip(&ids) {
            if !plan.has_meta || !plan.stage.is_initializing() {
                continue;
            }
            for viewer in viewers(&ids) {
                prop_assert_eq!(identity::name(subject, &world, viewer), plan.name);
            }
        }
    }

    #[test]
    fn ghost_sees_account_of_players(plans in arb_world()) {
        let (world, ids) = build_world(&plans);
        let ghosts: Vec<_> = plans
            .iter()
            .zip(&ids)
            .filter(|(plan, _)| plan.ghost)
            .map(|(_, &id)| id)
            .collect();

        for (plan, &subject) in plans.iter().zip(&ids) {
            let Some(username) = plan.username else { continue };
            if !plan.has_meta || plan.stage.is_initializing() {
                continue;
            }
            for &ghost in &ghosts {
                prop_assert_eq!(
                    identity::name(subject, &world, Some(ghost)),
                    format!("{} ({})", plan.name, username)
                );
            }
        }
    }

    #[test]
    fn unprivileged_viewers_never_see_two_names(plans in arb_world()) {
        let (world, ids) = build_world(&plans);

        for &subject in &ids {
            for (viewer_plan, &viewer) in plans.iter().zip(&ids) {
                if viewer_plan.ghost {
                    continue;
                }
                let name = identity::name(subject, &world, Some(viewer));
                prop_assert!(!name.contains('('), "unexpected reveal: {}", name);
                prop_assert_eq!(&name, &identity::name(subject, &world, None));
            }
        }
    }

    #[test]
    fn entity_follows_slot_only(plans in arb_world()) {
        let (world, ids) = build_world(&plans);

        for (plan, &subject) in plans.iter().zip(&ids) {
            let expected = match plan.identity {
                Some(Some(index)) => slot_target(&ids, index),
                Some(None) | None => subject,
            };
            prop_assert_eq!(identity::entity(subject, &world), expected);
        }
    }

    #[test]
    fn see_through_iff_ghost(plans in arb_world()) {
        let (world, ids) = build_world(&plans);

        for &subject in &ids {
            for (viewer_plan, &viewer) in plans.iter().zip(&ids) {
                prop_assert_eq!(
                    identity::can_see_through_identity(subject, viewer, &world),
                    viewer_plan.ghost
                );
            }
        }
    }

    #[test]
    fn batch_matches_single(plans in arb_world()) {
        let (world, ids) = build_world(&plans);
        let resolver = IdentityResolver::default();

        for &subject in &ids {
            let batch = resolver.names_for_viewers(subject, &world, &ids);
            let single: Vec<_> = ids
                .iter()
                .map(|&viewer| (viewer, resolver.name(subject, &world, Some(viewer))))
                .collect();
            prop_assert_eq!(batch, single);
        }
    }
}
