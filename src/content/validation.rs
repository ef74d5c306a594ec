//! Validation for gameplay config values.

use super::data::GameplayConfig;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a value is finite and non-negative
macro_rules! check_non_negative {
    ($errors:expr, $value:expr, $field:expr) => {
        let value: f32 = $value;
        if !value.is_finite() || value < 0.0 {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be finite and non-negative, got {}", value),
            });
        }
    };
}

/// Validate every field of the config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &GameplayConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let movement = &config.movement;

    check_non_negative!(errors, movement.move_speed, "movement.move_speed");
    check_non_negative!(errors, movement.jump_force, "movement.jump_force");
    check_non_negative!(errors, movement.max_jump_time, "movement.max_jump_time");
    check_non_negative!(errors, movement.jump_hold_force, "movement.jump_hold_force");
    check_non_negative!(errors, movement.double_jump_force, "movement.double_jump_force");
    check_non_negative!(errors, movement.rotation_speed, "movement.rotation_speed");
    check_non_negative!(errors, movement.move_deadzone, "movement.move_deadzone");

    if config.score.label.trim().is_empty() {
        errors.push(ValidationError {
            field: "score.label",
            message: "must not be empty".to_string(),
        });
    }

    errors
}
