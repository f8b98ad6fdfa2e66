//! Leaf state containers owned by mounted micro-apps.

pub mod counter;
pub mod error;
pub mod toggle_list;

pub use counter::BoundedCounter;
pub use error::StateError;
pub use toggle_list::ToggleList;
