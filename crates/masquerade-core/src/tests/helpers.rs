//! Test helper functions for building worlds.

use std::sync::Once;

use masquerade_world::{Actor, EntityId, World};

// =============================================================================
// Tracing
// =============================================================================

static TRACING: Once = Once::new();

/// Routes `tracing` output through the test harness so that it shows up for
/// failing tests only.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

// =============================================================================
// Entity Factory Functions
// =============================================================================

/// Spawns a ghost observer.
pub fn spawn_ghost(world: &mut World) -> EntityId {
    let id = world.spawn("Observer");
    world.insert_ghost(id).unwrap();
    id
}

/// Spawns an entity bound to a player session.
pub fn spawn_player(world: &mut World, name: &str, username: &str) -> EntityId {
    let id = world.spawn(name);
    world.insert_actor(id, Actor::new(username)).unwrap();
    id
}

/// Spawns `wearer` disguised as a fresh entity called `disguise`.
///
/// Returns `(wearer_id, disguise_id)`.
pub fn spawn_disguised(world: &mut World, wearer: &str, disguise: &str) -> (EntityId, EntityId) {
    let wearer = world.spawn(wearer);
    let mask = world.spawn(disguise);
    world.set_identity_slot(wearer, Some(mask)).unwrap();
    (wearer, mask)
}

// =============================================================================
// Scenario Setup
// =============================================================================

/// Entities of the standard scenario.
pub struct Crew {
    /// "Bob" (account "bob123") disguised as "Jane".
    pub bob: EntityId,
    /// The "Jane" disguise entity.
    pub jane_mask: EntityId,
    /// "Alice", undisguised, no player.
    pub alice: EntityId,
    /// Ghost observer.
    pub ghost: EntityId,
    /// Ordinary observer.
    pub crewmate: EntityId,
}

/// Builds the standard scenario used by most tests.
pub fn setup_crew(world: &mut World) -> Crew {
    let (bob, jane_mask) = spawn_disguised(world, "Bob", "Jane");
    world.insert_actor(bob, Actor::new("bob123")).unwrap();
    let alice = world.spawn("Alice");
    let ghost = spawn_ghost(world);
    let crewmate = world.spawn("Crewmate");
    Crew {
        bob,
        jane_mask,
        alice,
        ghost,
        crewmate,
    }
}
