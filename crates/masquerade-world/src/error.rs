//! Errors returned by mutating [`World`](crate::World) operations.

use thiserror::Error;

use crate::components::ComponentKind;
use crate::entity::EntityId;

/// Failure of a [`World`](crate::World) mutation or (de)serialization.
///
/// Read-side lookups never produce this error; they report absence instead.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The handle is [`EntityId::INVALID`].
    #[error("entity handle is invalid")]
    InvalidHandle,

    /// No live entity has this id.
    #[error("no entity with id {0}")]
    NoSuchEntity(EntityId),

    /// The entity lacks a component the operation needs.
    #[error("entity {id} has no {kind} component")]
    MissingComponent {
        /// Entity that was addressed.
        id: EntityId,
        /// Component that was expected.
        kind: ComponentKind,
    },

    /// A snapshot carries an entity key or id counter outside
    /// `1..=MAX_LOADED_ID`.
    #[error("entity id {0} is outside the loadable range")]
    IdOutOfRange(u64),

    /// Encoding or decoding a world snapshot failed.
    #[error("world serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
