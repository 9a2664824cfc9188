//! SVG chart rendering with plotters.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::assessment::{project, ContributingFactors, RiskAssessment, RiskCategory, RiskFactor};
use crate::domain::foundation::RiskScore;
use crate::ports::{Chart, ChartError, ChartOptions, ChartRenderer};

use super::render_error;
use super::theme::{rgb, Theme};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

const HIGH_CONTRIBUTION: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
const MEDIUM_CONTRIBUTION: RGBColor = RGBColor(0xff, 0xbb, 0x78);
const LOW_CONTRIBUTION: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);
const PROJECTION_LINE: RGBColor = RGBColor(0xd6, 0x27, 0x28);
const CURRENT_MARKER: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);

type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Renders charts as standalone SVG documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersChartRenderer;

impl PlottersChartRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render<F>(options: &ChartOptions, draw: F) -> Result<Chart, ChartError>
    where
        F: FnOnce(&SvgArea<'_>, &Theme) -> Result<(), ChartError>,
    {
        let theme = Theme::for_style(options.style);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
                .into_drawing_area();
            root.fill(&theme.background).map_err(render_error)?;
            draw(&root, &theme)?;
            root.present().map_err(render_error)?;
        }
        Ok(Chart {
            content_type: SVG_CONTENT_TYPE,
            body: svg.into_bytes(),
        })
    }
}

impl ChartRenderer for PlottersChartRenderer {
    fn render_risk_score(
        &self,
        assessment: &RiskAssessment,
        options: &ChartOptions,
    ) -> Result<Chart, ChartError> {
        Self::render(options, |root, theme| draw_risk_score(root, theme, assessment))
    }

    fn render_contributing_factors(
        &self,
        factors: &ContributingFactors,
        options: &ChartOptions,
    ) -> Result<Chart, ChartError> {
        Self::render(options, |root, theme| draw_contributing_factors(root, theme, factors))
    }

    fn render_timeline(
        &self,
        age: f64,
        score: RiskScore,
        options: &ChartOptions,
    ) -> Result<Chart, ChartError> {
        Self::render(options, |root, theme| draw_timeline(root, theme, age, score))
    }
}

fn draw_risk_score(
    root: &SvgArea<'_>,
    theme: &Theme,
    assessment: &RiskAssessment,
) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(root)
        .caption("Breast Cancer Risk Assessment", theme.title_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(30)
        .build_cartesian_2d(0f64..100f64, -0.5f64..0.5f64)
        .map_err(render_error)?;

    chart.plotting_area().fill(&theme.panel).map_err(render_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc("Risk Score (%)")
        .y_desc("Risk Category")
        .y_labels(0)
        .disable_y_mesh()
        .axis_style(theme.axis)
        .light_line_style(theme.panel)
        .label_style(theme.label_font());
    match theme.grid {
        Some(grid) => {
            mesh.bold_line_style(grid);
        }
        None => {
            mesh.disable_mesh();
        }
    }
    mesh.draw().map_err(render_error)?;

    for category in RiskCategory::ALL {
        let (lower, upper) = category.score_range();
        let band = rgb(category.color()).mix(0.2);
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(lower, -0.5), (upper, 0.5)],
                band.filled(),
            )))
            .map_err(render_error)?
            .label(category.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], band.filled()));
    }

    let score = assessment.score().value();
    let marker = rgb(assessment.category().color());
    chart
        .draw_series(
            dashed_segments((score, -0.5), (score, 0.5), 10)
                .into_iter()
                .map(|segment| PathElement::new(segment, marker.stroke_width(3))),
        )
        .map_err(render_error)?
        .label(format!("Your Risk: {:.1}%", score))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], marker.stroke_width(3)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(theme.axis)
        .label_font(theme.label_font())
        .draw()
        .map_err(render_error)?;

    theme.draw_frame(&chart.plotting_area().strip_coord_spec())
}

fn draw_contributing_factors(
    root: &SvgArea<'_>,
    theme: &Theme,
    factors: &ContributingFactors,
) -> Result<(), ChartError> {
    if factors.is_empty() {
        let area = root
            .titled("Contributing Risk Factors", theme.title_font())
            .map_err(render_error)?;
        let (width, height) = area.dim_in_pixel();
        let centered = TextStyle::from(theme.label_font()).pos(Pos::new(HPos::Center, VPos::Center));
        return area
            .draw(&Text::new(
                "No significant risk factors identified",
                ((width / 2) as i32, (height / 2) as i32),
                centered,
            ))
            .map_err(render_error);
    }

    let sorted = sorted_by_contribution(factors);
    let count = sorted.len() as i32;
    let largest = sorted.first().map(|(_, value)| *value).unwrap_or(1.0);
    let x_max = largest.max(1.0) * 1.2;
    let labels: Vec<String> = sorted.iter().map(|(factor, _)| factor.label()).collect();
    // Largest contribution on top.
    let row = |index: usize| count - 1 - index as i32;
    let label_for = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(r) => labels
            .get((count - 1 - r) as usize)
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    };

    let mut chart = ChartBuilder::on(root)
        .caption("Contributing Risk Factors", theme.title_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(160)
        .build_cartesian_2d(0f64..x_max, (0..count).into_segmented())
        .map_err(render_error)?;

    chart.plotting_area().fill(&theme.panel).map_err(render_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc("Risk Contribution (%)")
        .y_labels(sorted.len() + 1)
        .y_label_formatter(&label_for)
        .disable_y_mesh()
        .axis_style(theme.axis)
        .light_line_style(theme.panel)
        .label_style(theme.label_font());
    match theme.grid {
        Some(grid) => {
            mesh.bold_line_style(grid);
        }
        None => {
            mesh.disable_mesh();
        }
    }
    mesh.draw().map_err(render_error)?;

    chart
        .draw_series(sorted.iter().enumerate().map(|(index, (_, value))| {
            let r = row(index);
            let mut bar = Rectangle::new(
                [(0.0, SegmentValue::Exact(r)), (*value, SegmentValue::Exact(r + 1))],
                bar_color(*value).mix(0.8).filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))
        .map_err(render_error)?;

    let value_style = TextStyle::from(theme.label_font()).pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series(sorted.iter().enumerate().map(|(index, (_, value))| {
            Text::new(
                format!("{:.1}%", value),
                (*value + x_max * 0.01, SegmentValue::CenterOf(row(index))),
                value_style.clone(),
            )
        }))
        .map_err(render_error)?;

    theme.draw_frame(&chart.plotting_area().strip_coord_spec())
}

fn draw_timeline(
    root: &SvgArea<'_>,
    theme: &Theme,
    age: f64,
    score: RiskScore,
) -> Result<(), ChartError> {
    let points = project(age, score);
    let x_min = points.first().map(|p| p.age).unwrap_or(30.0).min(age - 1.0);
    let x_max = points.last().map(|p| p.age).unwrap_or(79.0).max(age + 1.0);
    let peak = points
        .iter()
        .map(|p| p.risk.value())
        .fold(score.value(), f64::max);
    let y_max = (peak * 1.15).clamp(5.0, 105.0);

    let mut chart = ChartBuilder::on(root)
        .caption("Risk Projection Over Time", theme.title_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(render_error)?;

    chart.plotting_area().fill(&theme.panel).map_err(render_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc("Age (years)")
        .y_desc("Estimated Risk (%)")
        .axis_style(theme.axis)
        .light_line_style(theme.panel)
        .label_style(theme.label_font());
    match theme.grid {
        Some(grid) => {
            mesh.bold_line_style(grid);
        }
        None => {
            mesh.disable_mesh();
        }
    }
    mesh.draw().map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.age, p.risk.value())),
            PROJECTION_LINE.stroke_width(2),
        ))
        .map_err(render_error)?
        .label("Estimated Risk Progression")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], PROJECTION_LINE.stroke_width(2)));

    chart
        .draw_series(
            dashed_segments((age, 0.0), (age, y_max), 12)
                .into_iter()
                .map(|segment| PathElement::new(segment, CURRENT_MARKER.stroke_width(2))),
        )
        .map_err(render_error)?
        .label(format!("Current Age: {:.0}", age))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], CURRENT_MARKER.stroke_width(2)));

    chart
        .draw_series(std::iter::once(Circle::new(
            (age, score.value()),
            6,
            CURRENT_MARKER.filled(),
        )))
        .map_err(render_error)?
        .label(format!("Current Risk: {:.1}%", score.value()))
        .legend(|(x, y)| Circle::new((x + 7, y), 5, CURRENT_MARKER.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(theme.axis)
        .label_font(theme.label_font())
        .draw()
        .map_err(render_error)?;

    theme.draw_frame(&chart.plotting_area().strip_coord_spec())
}

/// Factors sorted by contribution, largest first.
fn sorted_by_contribution(factors: &ContributingFactors) -> Vec<(RiskFactor, f64)> {
    let mut sorted: Vec<(RiskFactor, f64)> = factors.iter().map(|(f, v)| (*f, *v)).collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
    sorted
}

fn bar_color(value: f64) -> RGBColor {
    if value > 10.0 {
        HIGH_CONTRIBUTION
    } else if value > 5.0 {
        MEDIUM_CONTRIBUTION
    } else {
        LOW_CONTRIBUTION
    }
}

/// Splits a straight line into `dashes` evenly spaced visible segments.
fn dashed_segments(from: (f64, f64), to: (f64, f64), dashes: usize) -> Vec<Vec<(f64, f64)>> {
    let steps = (dashes * 2).saturating_sub(1).max(1);
    let lerp = |t: f64| (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
    (0..steps)
        .step_by(2)
        .map(|i| {
            vec![
                lerp(i as f64 / steps as f64),
                lerp((i + 1) as f64 / steps as f64),
            ]
        })
        .collect()
}
