//! Headless presentation layer: counter card, menu bar, and the app shell.

pub mod app;
pub mod counter_widget;
pub mod menu;

pub use app::{App, Flow};
pub use counter_widget::{Button, CounterWidget};
pub use menu::{MainMenu, Menu, MenuAction, MenuItem};
