//! Responsive root feature module.
//!
//! Selects and mounts one top-level screen from the viewport width and keeps
//! the choice current across resize notifications.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Width, mounted band and render count
//! - `intent.rs` - Lifecycle and host events (Mount, Resize, Render, Unmount)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `component.rs` - Subscription, child mounting and drawing

mod component;
mod intent;
mod reducer;
mod state;

pub use component::{ResponsiveRoot, RootHandle};
pub use intent::RootIntent;
pub use reducer::RootReducer;
pub use state::RootState;
