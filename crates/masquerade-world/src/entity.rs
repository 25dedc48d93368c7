//! Entity handles.
//!
//! [`EntityId`] is the opaque, copyable reference every other part of the
//! workspace passes around. Entities are never owned through an `EntityId`;
//! the handle only names a slot in some [`ComponentStore`](crate::ComponentStore).
//!
//! # Example
//!
//! ```
//! use masquerade_world::EntityId;
//!
//! let id = EntityId::new(42);
//! assert!(id.is_valid());
//! assert!(!EntityId::INVALID.is_valid());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an entity.
///
/// `EntityId` is a newtype wrapper around `u64`. The raw value `0` is reserved
/// as the invalid handle ([`EntityId::INVALID`]) so that "no entity" can be
/// expressed without an `Option` at storage boundaries.
///
/// # Ordering
///
/// Entity IDs are ordered by their numeric value, which gives stores a
/// deterministic iteration order.
///
/// # Example
///
/// ```
/// use masquerade_world::EntityId;
///
/// let id1 = EntityId::new(1);
/// let id2 = EntityId::new(2);
///
/// assert!(id1 < id2);
/// assert_eq!(id1.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// The reserved handle that never refers to an entity.
    pub const INVALID: Self = Self(0);

    /// Creates a new `EntityId` from a raw `u64` value.
    ///
    /// # Arguments
    ///
    /// * `id` - The raw identifier value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `false` for [`EntityId::INVALID`].
    ///
    /// This only inspects the handle itself. A valid handle may still name an
    /// entity the store no longer knows about; use
    /// [`ComponentStore::is_valid`](crate::ComponentStore::is_valid) for that.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}
