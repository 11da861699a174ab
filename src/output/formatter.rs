use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::{Bike, Measure};
use crate::scoring::Ranked;

pub const NO_MATCHES: &str =
    "No bikes matched your filters. Try relaxing budget, engine range, or height preference.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a heading to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Capitalize the first letter of every word ("royal enfield" -> "Royal Enfield")
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Whole rupees with comma thousands separators (125000 -> "125,000")
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Display a catalog number without a trailing ".0"; "N/A" if absent
fn measure(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}", v))
        .unwrap_or_else(|| "N/A".to_string())
}

fn value(field: &Option<Measure>) -> Option<f64> {
    field.as_ref().and_then(Measure::as_f64)
}

fn category(bike: &Bike) -> String {
    if bike.category_group.trim().is_empty() {
        "N/A".to_string()
    } else {
        title_case(&bike.category_group)
    }
}

/// Format one ranked bike as a multi-line block
pub fn format_bike_detail(index: usize, ranked: &Ranked, use_colors: bool) -> String {
    let bike = ranked.bike;
    let heading = format!("{}. {}", index, title_case(&bike.display_name()));
    let heading = match get_terminal_width() {
        Some(width) if width > 10 => truncate(&heading, width),
        _ => heading,
    };
    let price = value(&bike.price_inr)
        .map(format_price)
        .unwrap_or_else(|| "N/A".to_string());
    let seat_cm = value(&bike.seat_height_mm)
        .map(|mm| format!("{:.1}", mm / 10.0))
        .unwrap_or_else(|| "N/A".to_string());
    let score = format!("{}", ranked.score);

    let body = format!(
        "    Type: {}\n    Price: \u{20b9}{}\n    Mileage: {} kmpl | Engine: {} cc\n    Seat height: {} cm | Weight: {} kg\n    Fuel tank: {} L | Comfort: {}/5",
        category(bike),
        price,
        measure(value(&bike.mileage_kmpl)),
        measure(value(&bike.engine_cc)),
        seat_cm,
        measure(value(&bike.kerb_weight_kg)),
        measure(value(&bike.fuel_tank_l)),
        bike.comfort(),
    );

    if use_colors {
        format!("{}\n{}\n    Score: {}", heading.bold(), body, score.green())
    } else {
        format!("{}\n{}\n    Score: {}", heading, body, score)
    }
}

/// "Found N matching bikes, showing top K:" line
pub fn format_header(results: &[Ranked], top: usize, use_colors: bool) -> String {
    let shown = results.len().min(top);
    let header = format!(
        "Found {} matching bikes, showing top {}:",
        results.len(),
        shown
    );
    if use_colors {
        header.bold().to_string()
    } else {
        header
    }
}

/// Format the top `top` results, with a count header
pub fn format_results(results: &[Ranked], top: usize, use_colors: bool) -> String {
    if results.is_empty() {
        return NO_MATCHES.to_string();
    }

    let header = format_header(results, top, use_colors);

    let blocks: Vec<String> = results
        .iter()
        .take(top)
        .enumerate()
        .map(|(idx, ranked)| format_bike_detail(idx + 1, ranked, use_colors))
        .collect();

    format!("{}\n\n{}", header, blocks.join("\n\n"))
}

/// Format results as tab-separated values for scripting
/// Columns: score, brand, model, price, mileage, engine (no headers, no colors)
pub fn format_tsv(results: &[Ranked], top: usize) -> String {
    results
        .iter()
        .take(top)
        .map(|ranked| {
            let bike = ranked.bike;
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                ranked.score,
                bike.brand,
                bike.model,
                measure(value(&bike.price_inr)),
                measure(value(&bike.mileage_kmpl)),
                measure(value(&bike.engine_cc)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Explain how a score was put together (verbose mode)
pub fn format_breakdown(ranked: &Ranked) -> String {
    let b = &ranked.breakdown;
    let w = &b.weights;
    let mut lines = vec![
        format!("    mileage     {:.3} x {:.2}", b.mileage, w.mileage),
        format!("    performance {:.3} x {:.2}", b.performance, w.performance),
        format!("    comfort     {:.3} x {:.2}", b.comfort, w.comfort),
        format!("    tank        {:.3} x {:.2}", b.tank, w.tank),
        format!("    weight      {:.3} x -{:.2}", b.weight_penalty, w.weight),
    ];
    if b.lightweight_bonus > 0.0 {
        lines.push(format!("    lightweight bonus +{}", b.lightweight_bonus));
    }
    if b.touring_bonus > 0.0 {
        lines.push(format!("    touring bonus     +{}", b.touring_bonus));
    }
    lines.join("\n")
}
