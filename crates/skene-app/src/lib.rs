//! Skene application library entry.
//!
//! This crate wires config, localization, the headless UI layer and the
//! console front end around the counter service from `skene-core`. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod console;
pub mod localization;
pub mod ui;
