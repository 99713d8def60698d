//! Number and trend formatting
//!
//! Values render in the `es-AR` convention with exactly two decimals: `.`
//! groups thousands and `,` separates decimals (`935.000,00`). Trends render
//! with a plain decimal point and an explicit sign (`+5.30%`).

/// Two-decimal `es-AR` rendering of a value
///
/// The sign follows the input, so small negatives print as `-0,00`.
/// Non-finite values print as an em dash.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    format!("{}{},{}", sign, grouped, frac_part)
}

/// Direction of a trend, keyed to its sign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    /// Zero or positive
    Up,
    /// Negative
    Down,
}

impl TrendDirection {
    pub fn of(trend: f64) -> Self {
        // -0.0 >= 0.0 holds, so negative zero reads as Up
        if trend >= 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            TrendDirection::Up => "↗",
            TrendDirection::Down => "↘",
        }
    }

    /// Text color class
    pub fn color_class(&self) -> &'static str {
        match self {
            TrendDirection::Up => "text-chart-2",
            TrendDirection::Down => "text-destructive",
        }
    }

    /// Name used in test ids (`icon-trend-up-…`)
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
        }
    }
}

/// `+5.30%` / `-0.80%`
pub fn format_trend(trend: f64) -> String {
    match TrendDirection::of(trend) {
        TrendDirection::Up => format!("+{:.2}%", trend.abs()),
        TrendDirection::Down => format!("{:.2}%", trend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_grouping() {
        assert_eq!(format_value(935000.0), "935.000,00");
        assert_eq!(format_value(28500.0), "28.500,00");
        assert_eq!(format_value(1234567.891), "1.234.567,89");
        assert_eq!(format_value(125.4), "125,40");
        assert_eq!(format_value(2.7), "2,70");
    }

    #[test]
    fn test_format_value_negative() {
        assert_eq!(format_value(-68000.0), "-68.000,00");
        assert_eq!(format_value(-1.2), "-1,20");
    }

    #[test]
    fn test_format_value_zero() {
        assert_eq!(format_value(0.0), "0,00");
        assert_eq!(format_value(-0.0), "-0,00");
        assert_eq!(format_value(-0.001), "-0,00");
        assert_eq!(format_value(0.004), "0,00");
    }

    #[test]
    fn test_format_value_rounding_carries() {
        assert_eq!(format_value(999.999), "1.000,00");
    }

    #[test]
    fn test_format_value_non_finite() {
        assert_eq!(format_value(f64::NAN), "—");
        assert_eq!(format_value(f64::INFINITY), "—");
    }

    #[test]
    fn test_trend_polarity() {
        assert_eq!(format_trend(-0.8), "-0.80%");
        assert_eq!(TrendDirection::of(-0.8), TrendDirection::Down);
        assert_eq!(TrendDirection::of(-0.8).color_class(), "text-destructive");

        assert_eq!(format_trend(5.3), "+5.30%");
        assert_eq!(TrendDirection::of(5.3), TrendDirection::Up);
        assert_eq!(TrendDirection::of(5.3).color_class(), "text-chart-2");
    }

    #[test]
    fn test_zero_trend_is_up() {
        assert_eq!(format_trend(0.0), "+0.00%");
        assert_eq!(format_trend(-0.0), "+0.00%");
        assert_eq!(TrendDirection::of(0.0), TrendDirection::Up);
    }
}
