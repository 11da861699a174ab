use super::filter::{filter_candidates, Candidate};
use super::weights::Weights;
use crate::catalog::Bike;
use crate::prefs::Preferences;
use std::cmp::Ordering;

/// Added when the rider wants a light bike and this one is under the limit
pub const LIGHTWEIGHT_BONUS: f64 = 0.1;
pub const LIGHTWEIGHT_LIMIT_KG: f64 = 140.0;

/// Added when the rider plans long rides and the tank is over the limit
pub const TOURING_BONUS: f64 = 0.1;
pub const TOURING_TANK_LIMIT_L: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub mileage: f64,     // normalized, 0..=1
    pub performance: f64, // normalized, 0..=1
    pub comfort: f64,     // comfort_level / 5
    pub tank: f64,        // normalized, 0..=1
    pub weight_penalty: f64,
    pub weights: Weights,
    pub lightweight_bonus: f64,
    pub touring_bonus: f64,
}

impl ScoreBreakdown {
    /// Weighted blend before bonuses and rounding.
    pub fn weighted(&self) -> f64 {
        self.weights.mileage * self.mileage
            + self.weights.performance * self.performance
            + self.weights.comfort * self.comfort
            + self.weights.tank * self.tank
            - self.weights.weight * self.weight_penalty
    }

    pub fn total(&self) -> f64 {
        self.weighted() + self.lightweight_bonus + self.touring_bonus
    }
}

/// A bike that survived filtering, with its score.
#[derive(Debug, Clone)]
pub struct Ranked<'a> {
    pub bike: &'a Bike,
    /// Rounded to 3 decimal places
    pub score: f64,
    pub mileage_kmpl: f64,
    pub comfort_level: u8,
    pub breakdown: ScoreBreakdown,
}

/// Observed min and max of one metric across the survivors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |acc, v| match acc {
            None => Some(Bounds { min: v, max: v }),
            Some(b) => Some(Bounds { min: b.min.min(v), max: b.max.max(v) }),
        })
    }

    /// Rescale `value` to 0..=1 within these bounds; 0 when all values are equal.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            0.0
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Normalization {
    mileage: Bounds,
    engine: Bounds,
    tank: Bounds,
    weight: Bounds,
}

impl Normalization {
    fn from_candidates(candidates: &[Candidate<'_>]) -> Option<Self> {
        Some(Self {
            mileage: Bounds::of(candidates.iter().map(|c| c.specs.mileage_kmpl))?,
            engine: Bounds::of(candidates.iter().map(|c| c.engine_cc))?,
            tank: Bounds::of(candidates.iter().map(|c| c.specs.fuel_tank_l))?,
            weight: Bounds::of(candidates.iter().map(|c| c.specs.kerb_weight_kg))?,
        })
    }
}

/// Three decimals, halves rounded away from zero (0.0625 -> 0.063).
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn score_candidate(
    candidate: &Candidate<'_>,
    norm: &Normalization,
    weights: Weights,
    prefs: &Preferences,
) -> ScoreBreakdown {
    let specs = &candidate.specs;

    let lightweight_bonus =
        if prefs.wants_lightweight && specs.kerb_weight_kg < LIGHTWEIGHT_LIMIT_KG {
            LIGHTWEIGHT_BONUS
        } else {
            0.0
        };
    let touring_bonus = if prefs.long_rides && specs.fuel_tank_l > TOURING_TANK_LIMIT_L {
        TOURING_BONUS
    } else {
        0.0
    };

    ScoreBreakdown {
        mileage: norm.mileage.normalize(specs.mileage_kmpl),
        performance: norm.engine.normalize(candidate.engine_cc),
        comfort: f64::from(specs.comfort_level) / 5.0,
        tank: norm.tank.normalize(specs.fuel_tank_l),
        weight_penalty: norm.weight.normalize(specs.kerb_weight_kg),
        weights,
        lightweight_bonus,
        touring_bonus,
    }
}

/// Descending by score, then mileage, then comfort. `sort_by` is stable, so
/// full ties keep catalog order.
fn compare_ranked(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.mileage_kmpl
                .partial_cmp(&a.mileage_kmpl)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| b.comfort_level.cmp(&a.comfort_level))
}

/// Filter the catalog by the rider's hard constraints and rank the
/// survivors by weighted suitability, best first.
///
/// Never fails: incomplete records are skipped, and no survivors yields an
/// empty vector. The caller truncates to however many results it shows.
pub fn rank<'a>(catalog: &'a [Bike], prefs: &Preferences) -> Vec<Ranked<'a>> {
    let candidates = filter_candidates(catalog, prefs);
    tracing::debug!(
        catalog = catalog.len(),
        survivors = candidates.len(),
        "applied hard filters"
    );

    let Some(norm) = Normalization::from_candidates(&candidates) else {
        return Vec::new();
    };
    let weights = Weights::for_preferences(prefs);

    let mut ranked: Vec<Ranked<'a>> = candidates
        .iter()
        .map(|candidate| {
            let breakdown = score_candidate(candidate, &norm, weights, prefs);
            Ranked {
                bike: candidate.bike,
                score: round3(breakdown.total()),
                mileage_kmpl: candidate.specs.mileage_kmpl,
                comfort_level: candidate.specs.comfort_level,
                breakdown,
            }
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked
}
