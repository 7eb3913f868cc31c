use thiserror::Error;

/// Everything that can go wrong while loading, building or querying a [`TextIndex`](crate::TextIndex).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("no text has been loaded")]
    NotLoaded,

    #[error("the index has not been built")]
    NotBuilt,

    #[error(
        "ordering error in slots {slot}-{}: {left}'{left_excerpt}...' >= {right}'{right_excerpt}...'",
        .slot + 1
    )]
    OrderingViolation {
        /// slot of the left element of the offending adjacent pair
        slot: usize,
        left: usize,
        left_excerpt: String,
        right: usize,
        right_excerpt: String,
    },

    #[error("slot {slot} holds {position}, which is out of range or appears twice")]
    NotAPermutation { slot: usize, position: usize },

    #[error("invalid query: {reason}")]
    InvalidQuery { reason: &'static str },

    #[error("{what} {index} is out of range for length {len}")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("text of length {len} does not fit the index storage type (max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("unknown {kind} '{name}'")]
    UnknownOption { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, IndexError>;
