use super::seat::{seat_height_range, SeatBand};
use crate::catalog::{Bike, BikeSpecs, Rejection};
use crate::prefs::Preferences;

/// Fraction of the budget a price may fall outside either end
pub const PRICE_TOLERANCE: f64 = 0.1;

/// Millimeters a seat may fall outside the comfortable band on either side
pub const SEAT_HEIGHT_TOLERANCE_MM: f64 = 20.0;

/// A catalog record that passed every hard filter.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub bike: &'a Bike,
    pub specs: BikeSpecs,
    /// Numeric displacement; guaranteed by the engine filter
    pub engine_cc: f64,
}

/// Hard constraints derived from one preference record.
#[derive(Debug, Clone)]
pub struct HardFilters {
    brand: Option<String>,
    bike_type: Option<String>,
    min_price: f64,
    max_price: f64,
    min_mileage: f64,
    engine_min: Option<f64>,
    engine_max: Option<f64>,
    seat_band: SeatBand,
}

impl HardFilters {
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            brand: prefs.brand_filter(),
            bike_type: prefs.bike_type_filter(),
            min_price: prefs.budget_min * (1.0 - PRICE_TOLERANCE),
            max_price: prefs.budget_max * (1.0 + PRICE_TOLERANCE),
            min_mileage: prefs.min_mileage,
            engine_min: prefs.engine_min,
            engine_max: prefs.engine_max,
            seat_band: seat_height_range(prefs.user_height_cm),
        }
    }

    /// Run the validity check and every hard filter, in order.
    /// Returns the first reason the bike fails.
    pub fn check<'a>(&self, bike: &'a Bike) -> Result<Candidate<'a>, Rejection> {
        let specs = bike.specs()?;

        if let Some(ref brand) = self.brand {
            if !bike.brand.to_lowercase().contains(brand.as_str()) {
                return Err(Rejection::Brand);
            }
        }

        if let Some(ref bike_type) = self.bike_type {
            if !bike.category_group.to_lowercase().contains(bike_type.as_str()) {
                return Err(Rejection::Category);
            }
        }

        if !(self.min_price <= specs.price_inr && specs.price_inr <= self.max_price) {
            return Err(Rejection::Price);
        }

        if specs.mileage_kmpl < self.min_mileage {
            return Err(Rejection::Mileage);
        }

        let engine_cc = specs.engine_cc.ok_or(Rejection::Engine)?;
        if !matches_engine(engine_cc, self.engine_min, self.engine_max) {
            return Err(Rejection::Engine);
        }

        if !self
            .seat_band
            .contains_with_tolerance(specs.seat_height_mm, SEAT_HEIGHT_TOLERANCE_MM)
        {
            return Err(Rejection::SeatHeight);
        }

        Ok(Candidate { bike, specs, engine_cc })
    }
}

fn matches_engine(cc: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min {
        if cc < min {
            return false;
        }
    }
    if let Some(max) = max {
        if cc > max {
            return false;
        }
    }
    true
}

/// Keep the bikes that pass every hard filter, preserving catalog order.
pub fn filter_candidates<'a>(catalog: &'a [Bike], prefs: &Preferences) -> Vec<Candidate<'a>> {
    let filters = HardFilters::new(prefs);
    catalog
        .iter()
        .filter_map(|bike| match filters.check(bike) {
            Ok(candidate) => Some(candidate),
            Err(reason) => {
                tracing::trace!(bike = %bike.display_name(), %reason, "excluded");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Measure;

    fn bike(brand: &str, category: &str, price: f64, cc: f64, mileage: f64, seat: f64) -> Bike {
        Bike {
            brand: brand.to_string(),
            model: "test".to_string(),
            category_group: category.to_string(),
            price_inr: Some(price.into()),
            engine_cc: Some(cc.into()),
            mileage_kmpl: Some(mileage.into()),
            seat_height_mm: Some(seat.into()),
            kerb_weight_kg: Some(130.0.into()),
            fuel_tank_l: Some(12.0.into()),
            comfort_level: None,
        }
    }

    fn reason(b: &Bike, prefs: &Preferences) -> Option<Rejection> {
        HardFilters::new(prefs).check(b).err()
    }

    #[test]
    fn test_default_preferences_accept_complete_bike() {
        let b = bike("Hero", "commuter", 75_000.0, 110.0, 60.0, 790.0);
        assert!(reason(&b, &Preferences::default()).is_none());
    }

    #[test]
    fn test_incomplete_record_rejected_first() {
        let mut b = bike("Hero", "commuter", 75_000.0, 110.0, 60.0, 790.0);
        b.seat_height_mm = None;
        assert_eq!(
            reason(&b, &Preferences::default()),
            Some(Rejection::MissingField("seat_height_mm"))
        );
    }

    #[test]
    fn test_brand_substring_case_insensitive() {
        let b = bike("Royal Enfield", "cruiser", 190_000.0, 349.0, 35.0, 805.0);
        let prefs = Preferences { brand: Some("ENFIELD".to_string()), ..Preferences::default() };
        assert!(reason(&b, &prefs).is_none());

        let prefs = Preferences { brand: Some("honda".to_string()), ..Preferences::default() };
        assert_eq!(reason(&b, &prefs), Some(Rejection::Brand));
    }

    #[test]
    fn test_category_substring() {
        let b = bike("KTM", "Sport Naked", 180_000.0, 200.0, 35.0, 810.0);
        let prefs = Preferences { bike_type: Some("sport".to_string()), ..Preferences::default() };
        assert!(reason(&b, &prefs).is_none());

        let prefs = Preferences {
            bike_type: Some("cruiser".to_string()),
            ..Preferences::default()
        };
        assert_eq!(reason(&b, &prefs), Some(Rejection::Category));
    }

    #[test]
    fn test_price_band_has_ten_percent_tolerance() {
        let prefs = Preferences {
            budget_min: 100_000.0,
            budget_max: 150_000.0,
            ..Preferences::default()
        };
        let at_low_edge = bike("a", "", 90_000.0, 125.0, 50.0, 790.0);
        let at_high_edge = bike("a", "", 165_000.0, 125.0, 50.0, 790.0);
        let too_cheap = bike("a", "", 89_999.0, 125.0, 50.0, 790.0);
        let too_dear = bike("a", "", 165_001.0, 125.0, 50.0, 790.0);

        assert!(reason(&at_low_edge, &prefs).is_none());
        assert!(reason(&at_high_edge, &prefs).is_none());
        assert_eq!(reason(&too_cheap, &prefs), Some(Rejection::Price));
        assert_eq!(reason(&too_dear, &prefs), Some(Rejection::Price));
    }

    #[test]
    fn test_mileage_minimum() {
        let prefs = Preferences { min_mileage: 50.0, ..Preferences::default() };
        assert!(reason(&bike("a", "", 1.0, 100.0, 50.0, 790.0), &prefs).is_none());
        assert_eq!(
            reason(&bike("a", "", 1.0, 100.0, 49.9, 790.0), &prefs),
            Some(Rejection::Mileage)
        );
    }

    #[test]
    fn test_engine_bounds_are_inclusive_and_optional() {
        let prefs = Preferences {
            engine_min: Some(125.0),
            engine_max: Some(200.0),
            ..Preferences::default()
        };
        assert!(reason(&bike("a", "", 1.0, 125.0, 50.0, 790.0), &prefs).is_none());
        assert!(reason(&bike("a", "", 1.0, 200.0, 50.0, 790.0), &prefs).is_none());
        assert_eq!(
            reason(&bike("a", "", 1.0, 124.9, 50.0, 790.0), &prefs),
            Some(Rejection::Engine)
        );

        let below_only = Preferences { engine_max: Some(125.0), ..Preferences::default() };
        assert!(reason(&bike("a", "", 1.0, 97.0, 50.0, 790.0), &below_only).is_none());
        assert_eq!(
            reason(&bike("a", "", 1.0, 150.0, 50.0, 790.0), &below_only),
            Some(Rejection::Engine)
        );
    }

    #[test]
    fn test_non_numeric_engine_fails_engine_filter() {
        let mut b = bike("a", "", 1.0, 100.0, 50.0, 790.0);
        b.engine_cc = Some(Measure::Text("n/a".to_string()));
        assert_eq!(reason(&b, &Preferences::default()), Some(Rejection::Engine));
    }

    #[test]
    fn test_non_finite_engine_fails_engine_filter() {
        for text in ["NaN", "inf", "-infinity"] {
            let mut b = bike("a", "", 1.0, 100.0, 50.0, 790.0);
            b.engine_cc = Some(Measure::Text(text.to_string()));
            assert_eq!(reason(&b, &Preferences::default()), Some(Rejection::Engine));
        }
    }

    #[test]
    fn test_non_finite_required_field_is_missing() {
        let mut b = bike("a", "", 1.0, 100.0, 50.0, 790.0);
        b.price_inr = Some(Measure::Text("NaN".to_string()));
        assert_eq!(
            reason(&b, &Preferences::default()),
            Some(Rejection::MissingField("price_inr"))
        );
    }

    #[test]
    fn test_seat_height_band_with_tolerance() {
        let short = Preferences { user_height_cm: Some(155), ..Preferences::default() };
        assert!(reason(&bike("a", "", 1.0, 100.0, 50.0, 805.0), &short).is_none());
        assert_eq!(
            reason(&bike("a", "", 1.0, 100.0, 50.0, 806.0), &short),
            Some(Rejection::SeatHeight)
        );

        let tall = Preferences { user_height_cm: Some(185), ..Preferences::default() };
        assert!(reason(&bike("a", "", 1.0, 100.0, 50.0, 780.0), &tall).is_none());
        assert_eq!(
            reason(&bike("a", "", 1.0, 100.0, 50.0, 779.0), &tall),
            Some(Rejection::SeatHeight)
        );
    }

    #[test]
    fn test_filter_candidates_preserves_order() {
        let catalog = vec![
            bike("Hero", "", 70_000.0, 100.0, 65.0, 790.0),
            bike("Honda", "", 80_000.0, 125.0, 55.0, 790.0),
            bike("Hero", "", 90_000.0, 125.0, 60.0, 790.0),
        ];
        let prefs = Preferences { brand: Some("hero".to_string()), ..Preferences::default() };
        let survivors = filter_candidates(&catalog, &prefs);
        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0].specs.price_inr, 70_000.0);
        assert_eq!(survivors[1].specs.price_inr, 90_000.0);
        assert_eq!(survivors[1].engine_cc, 125.0);
    }
}
