//! Cross-module tests for identity resolution.
//!
//! - `scenarios.rs`: end-to-end naming cases on a populated world
//! - `properties.rs`: proptest checks over randomly built worlds
//! - `helpers.rs`: world builders and tracing setup

mod helpers;
mod properties;

pub use helpers::*;
