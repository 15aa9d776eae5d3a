//! Chart generation models

use chrono::NaiveDate;

/// A single labelled line on a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub name: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// Everything a renderer needs to draw one line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<ChartLine>,
}

impl ChartSpec {
    /// Earliest and latest date over all lines
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.lines.iter().flat_map(|l| l.points.iter().map(|p| p.0));
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Smallest and largest value over all lines
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut values = self.lines.iter().flat_map(|l| l.points.iter().map(|p| p.1));
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_bounds_span_all_lines() {
        let spec = ChartSpec {
            title: "t".into(),
            x_label: "Date".into(),
            y_label: "Price (USD)".into(),
            lines: vec![
                ChartLine { name: "a".into(), points: vec![(day(2), 5.0), (day(4), 7.0)] },
                ChartLine { name: "b".into(), points: vec![(day(1), 6.0), (day(3), 2.5)] },
            ],
        };
        assert_eq!(spec.date_bounds(), Some((day(1), day(4))));
        assert_eq!(spec.value_bounds(), Some((2.5, 7.0)));
    }

    #[test]
    fn test_bounds_empty() {
        let spec = ChartSpec {
            title: "t".into(),
            x_label: "Date".into(),
            y_label: "Price (USD)".into(),
            lines: vec![ChartLine { name: "a".into(), points: vec![] }],
        };
        assert_eq!(spec.date_bounds(), None);
        assert_eq!(spec.value_bounds(), None);
    }
}
