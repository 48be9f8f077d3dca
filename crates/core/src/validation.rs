//! Input validation for characters and missions.
//!
//! Used by the API layer before anything reaches the database. Each function
//! returns [`CoreError::Validation`] with a message suitable for the client.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length (in characters) of a character name, after trimming.
pub const MAX_CHARACTER_NAME_LENGTH: usize = 100;

/// Maximum length (in characters) of a mission description.
pub const MAX_MISSION_DESCRIPTION_LENGTH: usize = 2_000;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Trim a character name and check its length.
///
/// Returns the trimmed name, which is the form that gets stored and compared
/// for uniqueness.
pub fn normalize_character_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Character name must not be empty".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len > MAX_CHARACTER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Character name is {len} characters long; maximum is {MAX_CHARACTER_NAME_LENGTH}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a mission description: non-blank and within length limits.
pub fn validate_mission_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Mission description must not be empty".to_string(),
        ));
    }
    let len = description.chars().count();
    if len > MAX_MISSION_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Mission description is {len} characters long; maximum is {MAX_MISSION_DESCRIPTION_LENGTH}"
        )));
    }
    Ok(())
}

/// Validate that an experience reward is non-negative.
pub fn validate_xp_reward(xp_reward: i32) -> Result<(), CoreError> {
    if xp_reward < 0 {
        return Err(CoreError::Validation(format!(
            "xp_reward must be a non-negative integer, got {xp_reward}"
        )));
    }
    Ok(())
}
