//! Breakpoint-driven root component for terminal UIs.
//!
//! [`ui::root::ResponsiveRoot`] watches a [`viewport::ViewportProvider`] and
//! keeps exactly one of three screens mounted: mobile, tablet or desktop,
//! chosen by [`breakpoint::classify`].

pub mod breakpoint;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shutdown;
pub mod ui;
pub mod viewport;
