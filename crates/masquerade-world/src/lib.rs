//! # Masquerade World
//!
//! Entity handles, identity components and the component-store capability
//! that identity queries read from.
//!
//! - [`EntityId`]: opaque, copyable entity handle; `0` is the invalid handle
//! - [`LifeStage`]: ordered construction progress
//! - Components: [`MetaData`], [`Identity`], [`Ghost`], [`Actor`]
//! - [`ComponentStore`] / [`StoreExt`]: object-safe lookup plus typed access
//! - [`World`]: in-memory store implementing [`ComponentStore`]
//!
//! ## Usage
//!
//! ```
//! use masquerade_world::{Actor, Identity, StoreExt, World};
//!
//! let mut world = World::new();
//! let bob = world.spawn("Bob");
//! let jane = world.spawn("Jane");
//! world.insert_identity(bob, Identity::wearing(jane))?;
//! world.insert_actor(bob, Actor::new("bob123"))?;
//!
//! assert_eq!(world.try_get::<Identity>(bob).and_then(|i| i.slot), Some(jane));
//! # Ok::<(), masquerade_world::WorldError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod components;
pub mod entity;
pub mod error;
pub mod lifecycle;
pub mod store;
pub mod world;

pub use components::{
    Actor, Component, ComponentKind, ComponentRef, ComponentSet, Ghost, Identity, MetaData,
    PlayerSession,
};
pub use entity::EntityId;
pub use error::WorldError;
pub use lifecycle::LifeStage;
pub use store::{ComponentStore, StoreExt};
pub use world::{World, MAX_LOADED_ID};
