use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Comfort level assumed for bikes whose catalog entry has none.
pub const DEFAULT_COMFORT_LEVEL: u8 = 3;

/// A numeric catalog value. Catalogs in the wild store some numbers as
/// strings ("150"), so both forms are accepted and parsed on demand.
/// Any other JSON value is kept as `Other` and never counts as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Measure {
    /// Finite numeric value, or None for text that does not parse as a
    /// number, "NaN"/"inf" spellings, and non-scalar values.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Measure::Number(n) => Some(*n),
            Measure::Text(s) => s.trim().parse().ok(),
            Measure::Other(_) => None,
        };
        value.filter(|v: &f64| v.is_finite())
    }
}

/// `null` text fields read as empty strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Comfort levels are whole numbers 1-5, possibly written as strings.
/// Anything else reads as absent, so the default level applies.
fn lenient_comfort<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let level = Option::<Measure>::deserialize(deserializer)?
        .as_ref()
        .and_then(Measure::as_f64)
        .filter(|v| v.fract() == 0.0 && (1.0..=5.0).contains(v))
        .map(|v| v as u8);
    Ok(level)
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Number(value)
    }
}

/// One bike record as stored in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category_group: String,
    #[serde(default)]
    pub price_inr: Option<Measure>,
    #[serde(default)]
    pub engine_cc: Option<Measure>,
    #[serde(default)]
    pub mileage_kmpl: Option<Measure>,
    #[serde(default)]
    pub seat_height_mm: Option<Measure>,
    #[serde(default)]
    pub kerb_weight_kg: Option<Measure>,
    #[serde(default)]
    pub fuel_tank_l: Option<Measure>,
    #[serde(default, deserialize_with = "lenient_comfort")]
    pub comfort_level: Option<u8>,
}

/// Required numeric fields of a bike, resolved to numbers.
///
/// `engine_cc` stays optional here: a present but non-numeric displacement
/// does not invalidate the record, it fails the engine filter instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BikeSpecs {
    pub price_inr: f64,
    pub engine_cc: Option<f64>,
    pub mileage_kmpl: f64,
    pub seat_height_mm: f64,
    pub kerb_weight_kg: f64,
    pub fuel_tank_l: f64,
    pub comfort_level: u8,
}

/// Reasons a catalog record can be excluded from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("missing or non-numeric field `{0}`")]
    MissingField(&'static str),
    #[error("brand does not match")]
    Brand,
    #[error("category does not match")]
    Category,
    #[error("price outside budget band")]
    Price,
    #[error("mileage below minimum")]
    Mileage,
    #[error("engine displacement outside range")]
    Engine,
    #[error("seat height outside comfortable band")]
    SeatHeight,
}

impl Bike {
    /// Comfort level with the catalog default applied.
    pub fn comfort(&self) -> u8 {
        self.comfort_level.unwrap_or(DEFAULT_COMFORT_LEVEL)
    }

    /// Resolve the required numeric fields.
    ///
    /// Fails with `Rejection::MissingField` naming the first field that is
    /// absent (or, except for `engine_cc`, present but not a number).
    pub fn specs(&self) -> Result<BikeSpecs, Rejection> {
        let engine_cc = self
            .engine_cc
            .as_ref()
            .ok_or(Rejection::MissingField("engine_cc"))?
            .as_f64();

        Ok(BikeSpecs {
            price_inr: required(&self.price_inr, "price_inr")?,
            engine_cc,
            mileage_kmpl: required(&self.mileage_kmpl, "mileage_kmpl")?,
            seat_height_mm: required(&self.seat_height_mm, "seat_height_mm")?,
            kerb_weight_kg: required(&self.kerb_weight_kg, "kerb_weight_kg")?,
            fuel_tank_l: required(&self.fuel_tank_l, "fuel_tank_l")?,
            comfort_level: self.comfort(),
        })
    }

    /// "Brand Model" display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }
}

fn required(value: &Option<Measure>, field: &'static str) -> Result<f64, Rejection> {
    value
        .as_ref()
        .and_then(Measure::as_f64)
        .ok_or(Rejection::MissingField(field))
}
