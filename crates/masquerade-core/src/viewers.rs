//! Naming one entity for many observers at once.
//!
//! Chat lines, examine text and similar messages are rendered separately for
//! each recipient, since ghosts and ordinary players see different names for
//! the same speaker. [`IdentityResolver::names_for_viewers`] does that fan-out
//! in parallel with `rayon`.

use rayon::prelude::*;

use masquerade_world::{ComponentStore, EntityId};

use crate::identity::IdentityResolver;

impl IdentityResolver {
    /// Returns `(viewer, name)` for every viewer, in the order given.
    ///
    /// Each name equals `self.name(subject, store, Some(viewer))`.
    #[must_use]
    pub fn names_for_viewers<S>(
        &self,
        subject: EntityId,
        store: &S,
        viewers: &[EntityId],
    ) -> Vec<(EntityId, String)>
    where
        S: ComponentStore + Sync + ?Sized,
    {
        viewers
            .par_iter()
            .map(|&viewer| (viewer, self.name(subject, store, Some(viewer))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masquerade_world::{Actor, World};

    #[test]
    fn empty_viewer_list() {
        let mut world = World::new();
        let bob = world.spawn("Bob");

        let names = IdentityResolver::default().names_for_viewers(bob, &world, &[]);
        assert!(names.is_empty());
    }

    #[test]
    fn each_viewer_gets_own_name() {
        let mut world = World::new();
        let bob = world.spawn("Bob");
        let jane = world.spawn("Jane");
        let ghost = world.spawn("Observer");
        let crew = world.spawn("Crewmate");
        world.set_identity_slot(bob, Some(jane)).unwrap();
        world.insert_ghost(ghost).unwrap();

        let names =
            IdentityResolver::default().names_for_viewers(bob, &world, &[crew, ghost, bob]);

        assert_eq!(
            names,
            vec![
                (crew, "Jane".to_string()),
                (ghost, "Bob (Jane)".to_string()),
                (bob, "Jane".to_string()),
            ]
        );
    }

    #[test]
    fn preserves_order_for_many_viewers() {
        let mut world = World::new();
        let bob = world.spawn("Bob");
        world.insert_actor(bob, Actor::new("bob123")).unwrap();

        let viewers: Vec<_> = (0..256)
            .map(|i| {
                let v = world.spawn(format!("viewer{i}"));
                if i % 3 == 0 {
                    world.insert_ghost(v).unwrap();
                }
                v
            })
            .collect();

        let resolver = IdentityResolver::default();
        let names = resolver.names_for_viewers(bob, &world, &viewers);

        assert_eq!(names.len(), viewers.len());
        for ((viewer, name), expected_viewer) in names.iter().zip(&viewers) {
            assert_eq!(viewer, expected_viewer);
            assert_eq!(name, &resolver.name(bob, &world, Some(*viewer)));
        }
        assert_eq!(names[0].1, "Bob (bob123)");
        assert_eq!(names[1].1, "Bob");
    }
}
