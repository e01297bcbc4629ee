//! instrumeter core: instrument names, attribute bags, component categories,
//! and the shared error type.
//!
//! This crate defines the contracts shared between the registry setup code,
//! the measurement dispatcher, and the instrumented components. It carries no
//! runtime or backend dependencies so components can declare their category
//! without pulling in the metrics stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Recording paths must never crash the instrumented process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod attributes;
pub mod category;
pub mod error;
pub mod names;

pub use attributes::{AttrValue, Attributes};
pub use category::{Category, Instrumented};
/// Shared result type.
pub use error::{MeterError, Result};
