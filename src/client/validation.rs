//! Client-side argument checks run before a request is sent.

use crate::{Error, Result};

/// Rejects blank ids and texts, which would otherwise produce a confusing 404 or 422.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Rejects values outside `[min, max]`.
pub(crate) fn require_range(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Error::validation(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, value
        )));
    }
    Ok(())
}
