//! Outcome of a display-name query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule produced a display name, together with the names involved.
///
/// [`Display`](fmt::Display) renders the string shown to the viewer:
///
/// | Variant        | Rendered                  |
/// |----------------|---------------------------|
/// | `Unknown`      | `""`                      |
/// | `Initializing` | `"{name}"`                |
/// | `Account`      | `"{name} ({username})"`   |
/// | `Plain`        | `"{name}"`                |
/// | `Disguised`    | `"{disguise}"`            |
/// | `Revealed`     | `"{name} ({disguise})"`   |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameResolution {
    /// Invalid handle or no metadata.
    Unknown,
    /// Entity still under construction; raw name.
    Initializing {
        /// Raw metadata name.
        name: String,
    },
    /// Ghost viewer looking at a player-bound entity.
    Account {
        /// Raw metadata name.
        name: String,
        /// Account name of the bound session.
        username: String,
    },
    /// No usable disguise, or a disguise whose name matches the wearer's.
    Plain {
        /// Raw metadata name.
        name: String,
    },
    /// Disguise shown as-is to a viewer who cannot see through it.
    Disguised {
        /// Metadata name of the disguise entity.
        disguise: String,
    },
    /// Disguise seen through by a privileged viewer.
    Revealed {
        /// Raw metadata name of the wearer.
        name: String,
        /// Metadata name of the disguise entity.
        disguise: String,
    },
}

impl NameResolution {
    /// Short label of the rule that fired, for logs.
    #[must_use]
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Initializing { .. } => "initializing",
            Self::Account { .. } => "account",
            Self::Plain { .. } => "plain",
            Self::Disguised { .. } => "disguised",
            Self::Revealed { .. } => "revealed",
        }
    }

    /// Returns `true` if a disguise changed what the viewer sees.
    #[must_use]
    pub const fn is_disguised(&self) -> bool {
        matches!(self, Self::Disguised { .. } | Self::Revealed { .. })
    }
}

impl fmt::Display for NameResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => Ok(()),
            Self::Initializing { name } | Self::Plain { name } => f.write_str(name),
            Self::Account { name, username } => write!(f, "{name} ({username})"),
            Self::Disguised { disguise } => f.write_str(disguise),
            Self::Revealed { name, disguise } => write!(f, "{name} ({disguise})"),
        }
    }
}
