//! View-state layer for the HR dashboard.
//!
//! Screens follow one lifecycle: mount, fetch the primary resource, render;
//! when a secondary tab is first shown, fetch its data once and cache it
//! until the parent resource changes.
//!
//! - [`controller`]: loading/error/data state for one resource, with a
//!   generation guard against stale responses
//! - [`lazy`]: load-once secondary data keyed by a parent
//! - [`pages`]: per-screen controllers
//! - [`render`]: pure view models plus a terminal painter

pub mod config;
pub mod controller;
pub mod error;
pub mod lazy;
pub mod pages;
pub mod render;

pub use config::Config;
pub use controller::{LoadStatus, Resource, ResourceController, Ticket};
pub use error::LoadError;
pub use lazy::{Begin, LazyLoader, LazyState};
