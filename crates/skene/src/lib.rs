//! Top-level facade crate for Skene.
//!
//! Re-exports the counter core and the application layer so users can depend on a single crate.

pub mod core {
    pub use skene_core::*;
}

pub mod app {
    pub use skene_app::*;
}
