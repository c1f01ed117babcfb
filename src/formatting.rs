const SPARK_BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const SPARK_BARS_ASCII: [char; 8] = ['_', '.', '-', '~', '=', '+', '*', '#'];

pub fn format_amount(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "-".to_string()
    }
}

/// One character per point, scaled between the series minimum and maximum.
pub fn sparkline_bars(values: &[f64], ascii: bool) -> String {
    let bars = if ascii { &SPARK_BARS_ASCII } else { &SPARK_BARS };
    let finite = values.iter().copied().filter(|value| value.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    });
    let span = max - min;
    let top = bars.len() - 1;

    values
        .iter()
        .map(|&value| {
            if !value.is_finite() {
                return ' ';
            }
            if span <= f64::EPSILON {
                return bars[top / 2];
            }
            let scaled = ((value - min) / span * top as f64).round();
            bars[(scaled as usize).min(top)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkline_spans_lowest_to_highest_bar() {
        let bars = sparkline_bars(&[1200.0, 1500.0, 1000.0, 1700.0, 1300.0, 1800.0, 2100.0], false);
        assert_eq!(bars.chars().count(), 7);
        assert_eq!(bars.chars().nth(2), Some('▁'));
        assert_eq!(bars.chars().last(), Some('█'));
    }

    #[test]
    fn flat_series_uses_middle_bar() {
        assert_eq!(sparkline_bars(&[5.0, 5.0, 5.0], true), "~~~");
    }

    #[test]
    fn non_finite_points_are_blank() {
        let bars = sparkline_bars(&[0.0, f64::NAN, 10.0], true);
        assert_eq!(bars, "_ #");
    }

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(2100.0), "2100.00");
        assert_eq!(format_amount(f64::INFINITY), "-");
    }
}
