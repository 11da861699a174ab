/// Inclusive seat-height band in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatBand {
    pub min_mm: u32,
    pub max_mm: u32,
}

impl SeatBand {
    pub const fn new(min_mm: u32, max_mm: u32) -> Self {
        Self { min_mm, max_mm }
    }

    /// Whether `seat_height_mm` lies inside the band widened by `tolerance_mm` on both sides.
    pub fn contains_with_tolerance(&self, seat_height_mm: f64, tolerance_mm: f64) -> bool {
        let low = f64::from(self.min_mm) - tolerance_mm;
        let high = f64::from(self.max_mm) + tolerance_mm;
        low <= seat_height_mm && seat_height_mm <= high
    }
}

pub const ANY_HEIGHT: SeatBand = SeatBand::new(0, 9999);
pub const SHORT_RIDER: SeatBand = SeatBand::new(0, 785);
pub const MEDIUM_RIDER: SeatBand = SeatBand::new(760, 820);
pub const TALL_RIDER: SeatBand = SeatBand::new(800, 9999);

/// Comfortable seat-height band for a rider height in cm.
///
/// Heights of exactly 160 and 175 both fall in the medium band.
pub fn seat_height_range(user_height_cm: Option<u32>) -> SeatBand {
    match user_height_cm {
        None => ANY_HEIGHT,
        Some(h) if h < 160 => SHORT_RIDER,
        Some(h) if h <= 175 => MEDIUM_RIDER,
        Some(_) => TALL_RIDER,
    }
}
