//! Pure state and logic shared by the UI, compiled on every target.

pub mod grid;
pub mod query;
pub mod store;
pub mod theme;
pub mod toast;
