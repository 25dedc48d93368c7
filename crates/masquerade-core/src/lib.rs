//! # Masquerade Core
//!
//! Display identity resolution: what name an observer sees for an entity that
//! may be wearing a disguise, and which entity stands in for it.
//!
//! ## Architecture
//!
//! - [`IdentityResolver`]: the name/entity/see-through queries
//! - [`NameResolution`]: which naming rule fired, renderable as the final string
//! - [`ResolverConfig`]: serde-loadable switches
//! - [`identity`]: free functions using the default configuration
//!
//! The resolver reads through [`masquerade_world::ComponentStore`], so any
//! entity/component storage can sit underneath it.
//!
//! ## Usage
//!
//! ```
//! use masquerade_core::identity;
//! use masquerade_world::{Actor, World};
//!
//! let mut world = World::new();
//! let bob = world.spawn("Bob");
//! let ghost = world.spawn("Observer");
//! world.insert_actor(bob, Actor::new("bob123"))?;
//! world.insert_ghost(ghost)?;
//!
//! assert_eq!(identity::name(bob, &world, None), "Bob");
//! assert_eq!(identity::name(bob, &world, Some(ghost)), "Bob (bob123)");
//! # Ok::<(), masquerade_world::WorldError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export the store layer the resolver reads from
pub use masquerade_world;

pub mod config;
pub mod identity;
pub mod resolution;
pub mod viewers;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, ResolverConfig};
pub use identity::IdentityResolver;
pub use resolution::NameResolution;
