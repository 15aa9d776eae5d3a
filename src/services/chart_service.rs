use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use plotters::prelude::*;

use crate::config::ChartConfig;
use crate::models::{ChartLine, ChartSpec, PriceField, PriceSeries};
use crate::utils::errors::AppError;

// Dark theme, close to plotly's "plotly_dark"
const BACKGROUND: RGBColor = RGBColor(17, 17, 17);
const FOREGROUND: RGBColor = RGBColor(242, 245, 250);
const GRID: RGBColor = RGBColor(40, 52, 66);
const PALETTE: [RGBColor; 4] = [
    RGBColor(99, 110, 250),
    RGBColor(239, 85, 59),
    RGBColor(0, 204, 150),
    RGBColor(171, 99, 250),
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("failed to draw chart '{title}': {message}")]
    Draw { title: String, message: String },
}

/// Turns a [`ChartSpec`] into an embeddable markup fragment
pub trait ChartRenderer: Send + Sync {
    fn render(&self, spec: &ChartSpec) -> Result<String, ChartError>;
}

/// Build the three chart specs shown on the page, in display order:
/// open/close, high/low, then all four prices.
pub fn build_chart_specs(series: &PriceSeries, symbol: &str, currency: &str) -> [ChartSpec; 3] {
    use PriceField::*;

    let chart = |title: &str, fields: &[PriceField]| ChartSpec {
        title: format!("{} for {} ({})", title, symbol, currency),
        x_label: "Date".to_string(),
        y_label: format!("Price ({})", currency),
        lines: fields
            .iter()
            .map(|&field| ChartLine {
                name: format!("{} ({})", field.label(), currency),
                points: series.column(field),
            })
            .collect(),
    };

    [
        chart("Open and Close Prices", &[Open, Close]),
        chart("High and Low Prices", &[High, Low]),
        chart("All Prices", &[Open, High, Low, Close]),
    ]
}

/// Render the three page charts, preserving their order
pub fn create_plots(
    renderer: &dyn ChartRenderer,
    series: &PriceSeries,
    symbol: &str,
    currency: &str,
) -> Result<Vec<String>, AppError> {
    build_chart_specs(series, symbol, currency)
        .iter()
        .map(|spec| renderer.render(spec).map_err(|e| AppError::Render(e.to_string())))
        .collect()
}

/// Renders charts as inline SVG using plotters
#[derive(Debug, Clone, Copy)]
pub struct SvgChartRenderer {
    width: u32,
    height: u32,
}

impl SvgChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<String, ChartError> {
        let (x_min, x_max) = x_range(spec);
        let (y_min, y_max) = y_range(spec);

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&BACKGROUND).map_err(|e| draw_error(&spec.title, e))?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&spec.title, ("sans-serif", 22).into_font().color(&FOREGROUND))
                .margin(15)
                .x_label_area_size(40)
                .y_label_area_size(70)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(|e| draw_error(&spec.title, e))?;

            chart
                .configure_mesh()
                .bold_line_style(GRID.stroke_width(1))
                .light_line_style(BACKGROUND.stroke_width(1))
                .axis_style(GRID.stroke_width(1))
                .label_style(("sans-serif", 12).into_font().color(&FOREGROUND))
                .axis_desc_style(("sans-serif", 14).into_font().color(&FOREGROUND))
                .x_desc(spec.x_label.as_str())
                .y_desc(spec.y_label.as_str())
                .x_label_formatter(&|d: &DateTime<Utc>| d.format("%Y-%m-%d").to_string())
                .draw()
                .map_err(|e| draw_error(&spec.title, e))?;

            for (i, line) in spec.lines.iter().enumerate() {
                let color = PALETTE[i % PALETTE.len()];
                chart
                    .draw_series(LineSeries::new(
                        line.points
                            .iter()
                            .map(|&(date, value)| (to_utc(date), value.clamp(y_min, y_max))),
                        color.stroke_width(2),
                    ))
                    .map_err(|e| draw_error(&spec.title, e))?
                    .label(line.name.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(BACKGROUND.mix(0.8).filled())
                .border_style(GRID.stroke_width(1))
                .label_font(("sans-serif", 12).into_font().color(&FOREGROUND))
                .draw()
                .map_err(|e| draw_error(&spec.title, e))?;

            root.present().map_err(|e| draw_error(&spec.title, e))?;
        }

        Ok(svg)
    }
}

fn draw_error(title: &str, e: impl std::fmt::Display) -> ChartError {
    ChartError::Draw {
        title: title.to_string(),
        message: e.to_string(),
    }
}

fn to_utc(date: NaiveDate) -> DateTime<Utc> {
    DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

/// Date span of the chart; empty charts sit on the epoch day and single-day
/// charts are widened so the axis has a non-zero length
fn x_range(spec: &ChartSpec) -> (DateTime<Utc>, DateTime<Utc>) {
    let (first, last) = spec.date_bounds().unwrap_or_else(|| {
        let epoch = NaiveDate::default();
        (epoch, epoch)
    });
    if first == last {
        (to_utc(first) - Duration::days(1), to_utc(last) + Duration::days(1))
    } else {
        (to_utc(first), to_utc(last))
    }
}

/// Value span with 10% padding, floored at zero
///
/// Padding never drops below a millionth of the magnitude, so a flat series
/// still spans many ulps. Spans that overflow or collapse fall back to 0..1.
fn y_range(spec: &ChartSpec) -> (f64, f64) {
    let Some((min_price, max_price)) = spec.value_bounds() else {
        return (0.0, 1.0);
    };
    let magnitude = min_price.abs().max(max_price.abs()).max(1.0);
    let padding = ((max_price - min_price) * 0.1).max(magnitude * 1e-6);
    let (lo, hi) = ((min_price - padding).max(0.0), max_price + padding);
    if lo.is_finite() && hi.is_finite() && hi > lo {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}
