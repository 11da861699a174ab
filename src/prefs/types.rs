use serde::{Deserialize, Serialize};
use std::fmt;

/// Budget upper bound used when the rider gives no budget at all
pub const UNBOUNDED_BUDGET: f64 = 10_000_000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    City,
    Highway,
    #[default]
    Both,
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideType::City => write!(f, "city"),
            RideType::Highway => write!(f, "highway"),
            RideType::Both => write!(f, "both"),
        }
    }
}

/// Canonical rider preferences consumed by the ranking engine.
///
/// Front ends (interactive prompt, preference file) normalize raw input into
/// this shape; the engine never sees free text.
///
/// Example YAML:
/// ```yaml
/// brand: honda
/// budget_min: 80000
/// budget_max: 150000
/// min_mileage: 40
/// engine_min: 100
/// engine_max: 200
/// user_height_cm: 170
/// ride_type: city
/// wants_lightweight: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Preferences {
    /// Case-insensitive substring of the bike brand
    pub brand: Option<String>,

    pub budget_min: f64,
    pub budget_max: f64,

    /// Minimum mileage in kmpl; 0 disables the filter
    pub min_mileage: f64,

    /// Displacement bounds in cc; None means unbounded on that side
    pub engine_min: Option<f64>,
    pub engine_max: Option<f64>,

    /// Rider height, drives the seat-height band
    pub user_height_cm: Option<u32>,

    pub ride_type: RideType,
    pub wants_lightweight: bool,
    pub long_rides: bool,

    /// Case-insensitive substring of the bike's category group
    pub bike_type: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            brand: None,
            budget_min: 0.0,
            budget_max: UNBOUNDED_BUDGET,
            min_mileage: 0.0,
            engine_min: None,
            engine_max: None,
            user_height_cm: None,
            ride_type: RideType::Both,
            wants_lightweight: false,
            long_rides: false,
            bike_type: None,
        }
    }
}

impl Preferences {
    /// Brand needle, lowercased; empty strings count as unset
    pub fn brand_filter(&self) -> Option<String> {
        non_empty_lower(self.brand.as_deref())
    }

    /// Category needle, lowercased; empty strings count as unset
    pub fn bike_type_filter(&self) -> Option<String> {
        non_empty_lower(self.bike_type.as_deref())
    }

    /// One-line summary of the applied filters
    pub fn summary(&self) -> String {
        let engine = match (self.engine_min, self.engine_max) {
            (None, None) => "any".to_string(),
            (Some(min), None) => format!(">= {}cc", min),
            (None, Some(max)) => format!("<= {}cc", max),
            (Some(min), Some(max)) => format!("{}-{}cc", min, max),
        };
        let height = self
            .user_height_cm
            .map(|h| format!("{}cm", h))
            .unwrap_or_else(|| "any".to_string());

        format!(
            "brand: {}, type: {}, budget: {}-{}, min mileage: {}, engine: {}, height: {}, ride: {}, lightweight: {}, long rides: {}",
            self.brand.as_deref().unwrap_or("any"),
            self.bike_type.as_deref().unwrap_or("any"),
            self.budget_min,
            self.budget_max,
            self.min_mileage,
            engine,
            height,
            self.ride_type,
            self.wants_lightweight,
            self.long_rides
        )
    }
}

fn non_empty_lower(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
