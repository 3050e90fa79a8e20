//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: reading one column out of a tabular input
//! - [`observer`]: reporting skipped values and run timing
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod observer;
pub mod source;
