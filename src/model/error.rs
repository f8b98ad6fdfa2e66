use thiserror::Error;

use super::toggle_list::ItemId;

/// Errors raised by the micro-app state containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Construction was attempted with bounds or an initial value that
    /// violate `min <= value <= max`.
    #[error("invalid state: value {value} outside [{min}, {max}]")]
    InvalidState { value: i64, min: i64, max: i64 },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("item {0} is not in the list")]
    NotFound(ItemId),
}
