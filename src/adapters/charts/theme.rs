//! Concrete colors and fonts behind each `ChartStyle`.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::ports::{ChartError, ChartStyle};

use super::render_error;

const FONT_FAMILY: &str = "sans-serif";

/// Resolved visual settings for one render call.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: RGBColor,
    pub panel: RGBColor,
    pub grid: Option<RGBColor>,
    pub axis: RGBColor,
    pub full_frame: bool,
}

impl Theme {
    pub fn for_style(style: ChartStyle) -> Self {
        match style {
            ChartStyle::Seaborn => Self {
                background: WHITE,
                panel: RGBColor(234, 234, 242),
                grid: Some(WHITE),
                axis: RGBColor(120, 120, 120),
                full_frame: false,
            },
            ChartStyle::Classic => Self {
                background: WHITE,
                panel: WHITE,
                grid: Some(RGBColor(200, 200, 200)),
                axis: BLACK,
                full_frame: true,
            },
            ChartStyle::Minimal => Self {
                background: WHITE,
                panel: WHITE,
                grid: None,
                axis: RGBColor(160, 160, 160),
                full_frame: false,
            },
        }
    }

    pub fn title_font(&self) -> FontDesc<'static> {
        (FONT_FAMILY, 22).into_font().style(FontStyle::Bold)
    }

    pub fn label_font(&self) -> FontDesc<'static> {
        (FONT_FAMILY, 14).into_font()
    }

    /// Draws a border around the plotting area for framed styles.
    pub fn draw_frame(&self, area: &DrawingArea<SVGBackend<'_>, Shift>) -> Result<(), ChartError> {
        if !self.full_frame {
            return Ok(());
        }
        let (width, height) = area.dim_in_pixel();
        area.draw(&Rectangle::new(
            [(0, 0), (width as i32 - 1, height as i32 - 1)],
            self.axis.stroke_width(1),
        ))
        .map_err(render_error)
    }
}

/// Converts an `(r, g, b)` triple to a plotters color.
pub fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}
