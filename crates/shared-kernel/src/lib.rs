// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DomainError, DomainResult, ErrorContext, InfrastructureError, MailtallyError, PresentationError, Result};

pub mod error;
