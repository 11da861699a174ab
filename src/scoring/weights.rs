use crate::prefs::{Preferences, RideType};

/// Weight applied to the comfort term under every policy
pub const COMFORT_WEIGHT: f64 = 0.3;

/// Blend coefficients for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub mileage: f64,
    pub performance: f64,
    pub comfort: f64,
    pub tank: f64,
    /// Subtracted, not added: heavier bikes lose points
    pub weight: f64,
}

/// Mileage and performance weights, keyed by whether the rider set a
/// minimum mileage.
struct MileagePolicy {
    mileage_minimum_set: bool,
    mileage: f64,
    performance: f64,
}

/// Weight-penalty and tank weights, keyed by ride type.
struct RidePolicy {
    ride_type: RideType,
    weight: f64,
    tank: f64,
}

const MILEAGE_POLICIES: [MileagePolicy; 2] = [
    MileagePolicy { mileage_minimum_set: true, mileage: 0.4, performance: 0.2 },
    MileagePolicy { mileage_minimum_set: false, mileage: 0.2, performance: 0.2 },
];

const RIDE_POLICIES: [RidePolicy; 3] = [
    RidePolicy { ride_type: RideType::City, weight: 0.2, tank: 0.1 },
    RidePolicy { ride_type: RideType::Highway, weight: 0.1, tank: 0.3 },
    RidePolicy { ride_type: RideType::Both, weight: 0.15, tank: 0.2 },
];

impl Weights {
    /// Look up the weights for a mileage flag and ride type.
    pub fn lookup(mileage_minimum_set: bool, ride_type: RideType) -> Self {
        let mileage = MILEAGE_POLICIES
            .iter()
            .find(|p| p.mileage_minimum_set == mileage_minimum_set)
            .unwrap_or(&MILEAGE_POLICIES[1]);
        let ride = RIDE_POLICIES
            .iter()
            .find(|p| p.ride_type == ride_type)
            .unwrap_or(&RIDE_POLICIES[2]);

        Self {
            mileage: mileage.mileage,
            performance: mileage.performance,
            comfort: COMFORT_WEIGHT,
            tank: ride.tank,
            weight: ride.weight,
        }
    }

    pub fn for_preferences(prefs: &Preferences) -> Self {
        Self::lookup(prefs.min_mileage > 0.0, prefs.ride_type)
    }

    /// Sum of the added coefficients: the best possible score before bonuses.
    pub fn positive_sum(&self) -> f64 {
        self.mileage + self.performance + self.comfort + self.tank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_RIDE_TYPES: [RideType; 3] = [RideType::City, RideType::Highway, RideType::Both];

    #[test]
    fn test_city_with_mileage_minimum() {
        let w = Weights::lookup(true, RideType::City);
        assert_eq!(
            w,
            Weights { mileage: 0.4, performance: 0.2, comfort: 0.3, tank: 0.1, weight: 0.2 }
        );
    }

    #[test]
    fn test_highway_without_mileage_minimum() {
        let w = Weights::lookup(false, RideType::Highway);
        assert_eq!(
            w,
            Weights { mileage: 0.2, performance: 0.2, comfort: 0.3, tank: 0.3, weight: 0.1 }
        );
    }

    #[test]
    fn test_both_is_the_middle_ground() {
        let w = Weights::lookup(false, RideType::Both);
        assert_eq!(w.weight, 0.15);
        assert_eq!(w.tank, 0.2);
    }

    #[test]
    fn test_for_preferences_uses_mileage_flag() {
        let prefs = Preferences { min_mileage: 35.0, ..Preferences::default() };
        assert_eq!(Weights::for_preferences(&prefs).mileage, 0.4);
        assert_eq!(Weights::for_preferences(&Preferences::default()).mileage, 0.2);
    }

    #[test]
    fn test_positive_sum_without_mileage_minimum_is_at_most_one() {
        for ride in ALL_RIDE_TYPES {
            assert!(Weights::lookup(false, ride).positive_sum() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_positive_sum_with_mileage_minimum() {
        let sums: Vec<f64> = ALL_RIDE_TYPES
            .iter()
            .map(|&r| Weights::lookup(true, r).positive_sum())
            .collect();
        assert!((sums[0] - 1.0).abs() < 1e-9);
        assert!((sums[1] - 1.2).abs() < 1e-9);
        assert!((sums[2] - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_every_coefficient_is_positive() {
        for flag in [true, false] {
            for ride in ALL_RIDE_TYPES {
                let w = Weights::lookup(flag, ride);
                for c in [w.mileage, w.performance, w.comfort, w.tank, w.weight] {
                    assert!(c > 0.0 && c < 1.0);
                }
            }
        }
    }
}
