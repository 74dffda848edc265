use crate::properties::RailDirection;

/// Rejected block construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("activatable rails cannot turn (got {0:?})")]
    TurningRail(RailDirection),

    #[error("a torch cannot face down")]
    DownwardTorch,
}

/// Check `value` against an inclusive range.
pub(crate) fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<u8, BlockError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(BlockError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
