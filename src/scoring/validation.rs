use crate::prefs::Preferences;

/// Validate a preference record loaded from a file.
/// Returns all validation errors at once (not just the first).
///
/// `budget_min > budget_max` is deliberately not an error: the engine simply
/// finds nothing in an inverted band.
pub fn validate_preferences(prefs: &Preferences) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if prefs.budget_min < 0.0 {
        errors.push("budget_min: must be non-negative".to_string());
    }
    if prefs.budget_max < 0.0 {
        errors.push("budget_max: must be non-negative".to_string());
    }

    if prefs.min_mileage < 0.0 {
        errors.push("min_mileage: must be non-negative".to_string());
    }

    if let Some(min) = prefs.engine_min {
        if min < 0.0 {
            errors.push("engine_min: must be non-negative".to_string());
        }
    }
    if let Some(max) = prefs.engine_max {
        if max < 0.0 {
            errors.push("engine_max: must be non-negative".to_string());
        }
    }
    if let (Some(min), Some(max)) = (prefs.engine_min, prefs.engine_max) {
        if min > max {
            errors.push(format!(
                "engine_min: {} is greater than engine_max {}",
                min, max
            ));
        }
    }

    if prefs.user_height_cm == Some(0) {
        errors.push("user_height_cm: must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
