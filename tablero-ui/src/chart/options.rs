//! Chart and series options
//!
//! Colors are CSS color strings handed straight to the canvas, so anything
//! the browser accepts (`hsl(217 91% 60%)`, `transparent`) works.

/// Stroke pattern for grid and crosshair lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
    LargeDashed,
}

impl LineStyle {
    /// Canvas `setLineDash` segments
    pub fn dash_pattern(&self) -> &'static [f64] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dotted => &[1.0, 1.0],
            LineStyle::Dashed => &[2.0, 2.0],
            LineStyle::LargeDashed => &[6.0, 6.0],
        }
    }
}

/// Colors derived from the page theme at mount time
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    pub primary: String,
    pub border: String,
    pub muted_foreground: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            primary: "hsl(217 91% 60%)".to_string(),
            border: "hsl(214 32% 91%)".to_string(),
            muted_foreground: "hsl(215 16% 47%)".to_string(),
        }
    }
}

impl ChartTheme {
    /// Build from raw CSS custom property values (`217 91% 60%`)
    ///
    /// The stylesheet stores bare HSL components; each is wrapped in
    /// `hsl(...)`. Empty values fall back to the default palette.
    pub fn from_css_vars(primary: &str, border: &str, muted_foreground: &str) -> Self {
        let defaults = Self::default();
        let wrap = |raw: &str, fallback: String| {
            let raw = raw.trim();
            if raw.is_empty() {
                fallback
            } else {
                format!("hsl({})", raw)
            }
        };

        Self {
            primary: wrap(primary, defaults.primary),
            border: wrap(border, defaults.border),
            muted_foreground: wrap(muted_foreground, defaults.muted_foreground),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    pub background: String,
    pub text_color: String,
    pub font: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLineOptions {
    pub visible: bool,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridOptions {
    pub vert_lines: GridLineOptions,
    pub horz_lines: GridLineOptions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceScaleOptions {
    pub border_visible: bool,
    /// Width reserved on the right for value labels
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimeScaleOptions {
    pub border_visible: bool,
    pub time_visible: bool,
    /// Height reserved at the bottom for time labels
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrosshairLineOptions {
    pub width: f64,
    pub color: String,
    pub style: LineStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrosshairOptions {
    pub vert_line: CrosshairLineOptions,
    pub horz_line: CrosshairLineOptions,
}

/// Whole-chart options
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub layout: LayoutOptions,
    pub grid: GridOptions,
    pub right_price_scale: PriceScaleOptions,
    pub time_scale: TimeScaleOptions,
    pub crosshair: CrosshairOptions,
}

impl ChartOptions {
    /// Dashboard chart: transparent background, themed grid, hidden scale
    /// borders, dashed crosshair in the muted color
    pub fn themed(theme: &ChartTheme, width: f64, height: f64, show_grid: bool) -> Self {
        let grid_line = GridLineOptions {
            visible: show_grid,
            color: theme.border.clone(),
        };
        let crosshair_line = CrosshairLineOptions {
            width: 1.0,
            color: theme.muted_foreground.clone(),
            style: LineStyle::LargeDashed,
        };

        Self {
            width,
            height,
            layout: LayoutOptions {
                background: "transparent".to_string(),
                text_color: theme.muted_foreground.clone(),
                font: "12px sans-serif".to_string(),
            },
            grid: GridOptions {
                vert_lines: grid_line.clone(),
                horz_lines: grid_line,
            },
            right_price_scale: PriceScaleOptions {
                border_visible: false,
                width: 64.0,
            },
            time_scale: TimeScaleOptions {
                border_visible: false,
                time_visible: true,
                height: 26.0,
            },
            crosshair: CrosshairOptions {
                vert_line: crosshair_line.clone(),
                horz_line: crosshair_line,
            },
        }
    }

    /// Same options at a new width
    pub fn with_width(&self, width: f64) -> Self {
        Self {
            width,
            ..self.clone()
        }
    }
}

/// Area series styling
#[derive(Clone, Debug, PartialEq)]
pub struct AreaSeriesOptions {
    pub line_color: String,
    pub line_width: f64,
    /// Fill color at the line
    pub top_color: String,
    /// Fill color at the baseline
    pub bottom_color: String,
}

impl AreaSeriesOptions {
    pub fn themed(theme: &ChartTheme) -> Self {
        Self {
            line_color: theme.primary.clone(),
            line_width: 2.0,
            top_color: "hsl(217 91% 60% / 0.28)".to_string(),
            bottom_color: "hsl(217 91% 60% / 0.05)".to_string(),
        }
    }
}
