pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod root;
pub mod runtime;
pub mod screens;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
