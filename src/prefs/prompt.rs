use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::parse::{
    parse_bike_type, parse_brand, parse_engine_range, parse_float, parse_int, parse_ride_type,
    parse_yes_no, resolve_budget,
};
use super::types::Preferences;

/// Interactive question sequence that builds a `Preferences` record.
///
/// Every question can be skipped with Enter. Generic over the reader and
/// writer so the flow can be driven from tests.
pub struct PreferencePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PreferencePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a message and return the trimmed answer (empty on EOF).
    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;
        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read input")?;
        Ok(answer.trim().to_string())
    }

    fn ask_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        let answer = self.ask(&format!("{} {}: ", message, hint))?;
        Ok(parse_yes_no(&answer, default_yes))
    }

    /// Run the full question sequence.
    pub fn run(&mut self) -> Result<Preferences> {
        writeln!(self.output, "\nBike Finder (press Enter to skip any question)\n")
            .context("Failed to write prompt")?;

        let brand = self.ask("Preferred brand (e.g. 'hero', 'honda', skip to accept any): ")?;
        let budget_min = self.ask("Min budget (INR): ")?;
        let budget_max = self.ask("Max budget (INR): ")?;
        let min_mileage = self.ask("Minimum mileage (kmpl) (skip for no minimum): ")?;
        let engine = self.ask("Engine CC (e.g. 'below 125', '125-200', 'above 200', or skip): ")?;
        let height =
            self.ask("Your height in cm (used for seat-height suitability, skip if unknown): ")?;
        let ride_type = self.ask("Ride type ('city', 'highway', 'both') [default both]: ")?;
        let wants_lightweight = self.ask_yes_no(
            "Prefer lightweight bikes? (improves maneuverability in city)",
            false,
        )?;
        let long_rides = self.ask_yes_no(
            "Do you plan many long rides/touring? (affects tank preference)",
            false,
        )?;
        let bike_type = self.ask(
            "Are you looking for a specific type (sport / commuter / adventure / cruiser)? (skip for any): ",
        )?;

        let (budget_min, budget_max) =
            resolve_budget(parse_int(&budget_min), parse_int(&budget_max));
        let (engine_min, engine_max) = parse_engine_range(&engine);

        let prefs = Preferences {
            brand: parse_brand(&brand),
            budget_min,
            budget_max,
            min_mileage: parse_float(&min_mileage).unwrap_or(0.0),
            engine_min,
            engine_max,
            user_height_cm: parse_int(&height).and_then(|h| u32::try_from(h).ok()),
            ride_type: parse_ride_type(&ride_type),
            wants_lightweight,
            long_rides,
            bike_type: parse_bike_type(&bike_type),
        };

        writeln!(self.output, "\nApplied filters: {}", prefs.summary())
            .context("Failed to write prompt")?;
        tracing::debug!(?prefs, "collected preferences");

        Ok(prefs)
    }
}

/// Prompt on the process stdin/stdout.
pub fn prompt_preferences() -> Result<Preferences> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    PreferencePrompt::new(stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::RideType;
    use std::io::Cursor;

    fn run_with(answers: &str) -> (Preferences, String) {
        let mut output = Vec::new();
        let prefs = PreferencePrompt::new(Cursor::new(answers.to_string()), &mut output)
            .run()
            .unwrap();
        (prefs, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_all_answers() {
        let answers = "Honda\n80000\n150000\n40\n100-200\n170\ncity\ny\nn\ncommuter\n";
        let (prefs, output) = run_with(answers);

        assert_eq!(prefs.brand.as_deref(), Some("honda"));
        assert_eq!(prefs.budget_min, 80_000.0);
        assert_eq!(prefs.budget_max, 150_000.0);
        assert_eq!(prefs.min_mileage, 40.0);
        assert_eq!(prefs.engine_min, Some(100.0));
        assert_eq!(prefs.engine_max, Some(200.0));
        assert_eq!(prefs.user_height_cm, Some(170));
        assert_eq!(prefs.ride_type, RideType::City);
        assert!(prefs.wants_lightweight);
        assert!(!prefs.long_rides);
        assert_eq!(prefs.bike_type.as_deref(), Some("commuter"));
        assert!(output.contains("Applied filters:"));
    }

    #[test]
    fn test_all_skipped() {
        let (prefs, _) = run_with("\n\n\n\n\n\n\n\n\n\n");

        assert!(prefs.brand.is_none());
        assert_eq!(prefs.budget_min, 0.0);
        assert_eq!(prefs.budget_max, 10_000_000.0);
        assert_eq!(prefs.min_mileage, 0.0);
        assert_eq!(prefs.engine_min, Some(0.0));
        assert_eq!(prefs.engine_max, Some(5000.0));
        assert!(prefs.user_height_cm.is_none());
        assert_eq!(prefs.ride_type, RideType::Both);
        assert!(!prefs.wants_lightweight);
        assert!(prefs.bike_type.is_none());
    }

    #[test]
    fn test_eof_behaves_like_skipping() {
        let (prefs, _) = run_with("");
        assert_eq!(prefs.ride_type, RideType::Both);
        assert!(prefs.user_height_cm.is_none());
    }

    #[test]
    fn test_garbage_resolves_to_defaults() {
        let answers = "\nlots\n120000\nmany\nbig\n-5\nmoon\nmaybe\nyep\nscooter\n";
        let (prefs, _) = run_with(answers);

        assert_eq!(prefs.budget_min, 60_000.0);
        assert_eq!(prefs.budget_max, 120_000.0);
        assert_eq!(prefs.min_mileage, 0.0);
        assert_eq!(prefs.engine_min, Some(0.0));
        assert!(prefs.user_height_cm.is_none());
        assert_eq!(prefs.ride_type, RideType::Both);
        assert!(!prefs.wants_lightweight);
        assert!(prefs.long_rides);
        assert!(prefs.bike_type.is_none());
    }

    #[test]
    fn test_questions_are_written() {
        let (_, output) = run_with("");
        assert!(output.contains("Preferred brand"));
        assert!(output.contains("Engine CC"));
        assert!(output.contains("[y/N]"));
    }
}
