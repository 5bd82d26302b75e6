//! Skene core: the counter service, its observer contract, and the shared error type.
//!
//! This crate holds the business state of the application and nothing else.
//! It carries no GUI, localization, or runtime dependencies so the same service
//! can be driven by the console front end, by tests, or by any other shell.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Counter operations are total; the only fallible surface is the observer
//! callback, whose errors are logged and isolated by the service.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;

pub use counter::{observer_fn, CounterObserver, CounterService, CounterState, ObserverId};
/// Shared result type.
pub use error::{ErrorKind, Result, SkeneError};
