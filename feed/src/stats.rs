//! Percentage math behind the comparison bars.

/// Home/away share of a comparison bar, in whole percent. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSplit {
    pub home: u8,
    pub away: u8,
}

/// Split a (home, away) pair into whole percentages.
///
/// The divisor is `max(1, home + away)`, so a 0/0 pair comes out as 0/100
/// rather than dividing by zero. Pairs whose sum is below one are split
/// against 1 as well (xG 0.3 vs 0.2 gives 30/70). Negative and NaN inputs
/// count as zero.
pub fn split_percent(home: f64, away: f64) -> StatSplit {
    let home = home.max(0.0);
    let away = away.max(0.0);
    let total = (home + away).max(1.0);
    let left = clamp_percent((home / total * 100.0).round()) as u8;
    StatSplit {
        home: left,
        away: 100 - left,
    }
}

/// Restrict a percentage-like value to `[0, 100]`. NaN maps to 0.
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.min(100.0).max(0.0)
}

/// Number of cells the home side gets on a bar `width` cells wide.
pub fn bar_cells(percent: f64, width: u16) -> u16 {
    let share = clamp_percent(percent) / 100.0;
    ((f64::from(width) * share).round() as u16).min(width)
}

/// Whole numbers print without a decimal point; fractional values as-is.
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
