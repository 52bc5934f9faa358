use utils::MAX_TICK;

use crate::error::ThresholdError;

/// Checks that `threshold` can be added to or subtracted from a spacing-aligned
/// tick and still yield a valid, aligned boundary.
pub fn validate_threshold(threshold: i32, spacing: i32) -> Result<(), ThresholdError> {
    if threshold <= 0 {
        return Err(ThresholdError::NotPositive);
    }
    if threshold >= MAX_TICK {
        return Err(ThresholdError::TooHigh);
    }
    if threshold % spacing != 0 {
        return Err(ThresholdError::NotSpacingMultiple);
    }
    Ok(())
}
