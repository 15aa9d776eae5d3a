//! Daily price models

use chrono::NaiveDate;

/// One trading day of OHLCV data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// The four price columns of a bar (volume is never charted or converted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

impl PriceField {
    pub fn label(self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
        }
    }

    pub fn value(self, bar: &PriceBar) -> f64 {
        match self {
            PriceField::Open => bar.open,
            PriceField::High => bar.high,
            PriceField::Low => bar.low,
            PriceField::Close => bar.close,
        }
    }
}

/// USD to target currency multiplier, always positive and finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    pub fn new(rate: f64) -> Option<Self> {
        if rate.is_finite() && rate > 0.0 {
            Some(ExchangeRate(rate))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Daily bars for one symbol, sorted ascending by date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn from_bars(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        PriceSeries { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// (date, value) pairs for one column
    pub fn column(&self, field: PriceField) -> Vec<(NaiveDate, f64)> {
        self.bars.iter().map(|b| (b.date, field.value(b))).collect()
    }

    /// Multiply open/high/low/close by the rate in place; volume is left alone
    pub fn convert(&mut self, rate: ExchangeRate) {
        let r = rate.value();
        for bar in &mut self.bars {
            bar.open *= r;
            bar.high *= r;
            bar.low *= r;
            bar.close *= r;
        }
    }

    /// False once any open/high/low/close is infinite or NaN
    pub fn is_finite(&self) -> bool {
        self.bars
            .iter()
            .all(|b| [b.open, b.high, b.low, b.close].iter().all(|v| v.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, open: f64, high: f64, low: f64, close: f64, volume: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn test_bars_sorted_ascending() {
        let series = PriceSeries::from_bars(vec![
            bar("2024-01-03", 3.0, 3.0, 3.0, 3.0, 1.0),
            bar("2024-01-01", 1.0, 1.0, 1.0, 1.0, 1.0),
            bar("2024-01-02", 2.0, 2.0, 2.0, 2.0, 1.0),
        ]);
        let opens: Vec<f64> = series.column(PriceField::Open).into_iter().map(|(_, v)| v).collect();
        assert_eq!(opens, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_convert_scales_prices_not_volume() {
        let original = PriceSeries::from_bars(vec![
            bar("2024-01-01", 10.0, 12.5, 9.75, 11.1, 1000.0),
            bar("2024-01-02", 11.1, 13.0, 10.2, 12.9, 2500.0),
        ]);
        let rate = ExchangeRate::new(0.9173).unwrap();
        let mut converted = original.clone();
        converted.convert(rate);

        for (before, after) in original.bars().iter().zip(converted.bars()) {
            assert!((after.open - before.open * 0.9173).abs() < 1e-9);
            assert!((after.high - before.high * 0.9173).abs() < 1e-9);
            assert!((after.low - before.low * 0.9173).abs() < 1e-9);
            assert!((after.close - before.close * 0.9173).abs() < 1e-9);
            assert_eq!(after.volume, before.volume);
            assert_eq!(after.date, before.date);
        }
    }

    #[test]
    fn test_convert_overflow_not_finite() {
        let mut series = PriceSeries::from_bars(vec![bar("2024-01-01", 1.7e308, 1.7e308, 1.0, 1.0, 1.0)]);
        series.convert(ExchangeRate::new(1.0).unwrap());
        assert!(series.is_finite());

        series.convert(ExchangeRate::new(2.0).unwrap());
        assert!(!series.is_finite());
        assert!(PriceSeries::default().is_finite());
    }

    #[test]
    fn test_exchange_rate_must_be_positive() {
        assert!(ExchangeRate::new(1.0).is_some());
        assert!(ExchangeRate::new(0.0).is_none());
        assert!(ExchangeRate::new(-2.0).is_none());
        assert!(ExchangeRate::new(f64::NAN).is_none());
        assert!(ExchangeRate::new(f64::INFINITY).is_none());
    }
}
