//! Entity construction progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of an entity, in construction order.
///
/// Stages are totally ordered, so "at or before `Initializing`" is a plain
/// comparison. While an entity is at or before [`LifeStage::Initializing`],
/// components other than its metadata may not be ready to read.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LifeStage {
    /// Allocated, no components initialized yet.
    PreInit,
    /// Components are being initialized.
    Initializing,
    /// All components initialized.
    #[default]
    Initialized,
    /// Placed on a running map.
    MapInitialized,
    /// Teardown in progress.
    Terminating,
    /// Removed from the world.
    Deleted,
}

impl LifeStage {
    /// Every stage, in order.
    pub const ALL: [Self; 6] = [
        Self::PreInit,
        Self::Initializing,
        Self::Initialized,
        Self::MapInitialized,
        Self::Terminating,
        Self::Deleted,
    ];

    /// Returns `true` while dependent components are not yet safe to read.
    #[must_use]
    pub fn is_initializing(self) -> bool {
        self <= Self::Initializing
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreInit => write!(f, "PreInit"),
            Self::Initializing => write!(f, "Initializing"),
            Self::Initialized => write!(f, "Initialized"),
            Self::MapInitialized => write!(f, "MapInitialized"),
            Self::Terminating => write!(f, "Terminating"),
            Self::Deleted => write!(f, "Deleted"),
        }
    }
}
