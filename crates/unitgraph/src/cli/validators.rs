//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use crate::domain::UnitId;

/// Validate a unit name given on the command line.
///
/// Unit names are opaque labels, so the only checks are that the name is not
/// blank and carries no surrounding whitespace after trimming.
pub fn validate_unit_name(s: &str) -> Result<UnitId, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err("Unit name cannot be empty".to_string());
    }

    if trimmed.chars().any(char::is_control) {
        return Err(format!(
            "Unit name '{}' contains control characters",
            trimmed.escape_debug()
        ));
    }

    Ok(UnitId::from(trimmed))
}
