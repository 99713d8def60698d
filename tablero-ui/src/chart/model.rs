//! Chart Model
//!
//! Everything about a chart that is not pixels: options, series data, the
//! visible time range and the mapping from (time, value) to plot coordinates.
//! The canvas surface asks the model where to draw and never does the math
//! itself, which keeps this half testable off the browser.

use chrono::{DateTime, NaiveDate};

use super::options::{AreaSeriesOptions, ChartOptions};
use crate::state::DataPoint;

/// Gap above the plot so the top line is not clipped
const PLOT_TOP_INSET: f64 = 8.0;

/// Fraction of the value span added above and below the data
const VALUE_PADDING: f64 = 0.1;

/// Parse a series time into unix seconds
///
/// Accepts plain dates (`2025-10-01`, taken as midnight UTC) and RFC 3339
/// timestamps.
pub fn parse_time(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp());
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.timestamp())
}

/// Time axis label (`10/2025`)
pub fn format_time_label(time: i64) -> String {
    DateTime::from_timestamp(time, 0)
        .map(|dt| dt.format("%m/%Y").to_string())
        .unwrap_or_default()
}

/// A point after parsing, ordered by time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub time: i64,
    pub value: f64,
}

/// Handle to a series inside a [`ChartModel`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesId(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct AreaSeries {
    pub options: AreaSeriesOptions,
    pub points: Vec<SeriesPoint>,
}

/// Inclusive time range in unix seconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

/// Drawable rectangle in CSS pixels, excluding the scales
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Debug)]
pub struct ChartModel {
    options: ChartOptions,
    series: Vec<AreaSeries>,
    visible: Option<TimeRange>,
}

impl ChartModel {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            series: Vec::new(),
            visible: None,
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn apply_options(&mut self, options: ChartOptions) {
        self.options = options;
    }

    pub fn add_area_series(&mut self, options: AreaSeriesOptions) -> SeriesId {
        self.series.push(AreaSeries {
            options,
            points: Vec::new(),
        });
        SeriesId(self.series.len() - 1)
    }

    pub fn series(&self, id: SeriesId) -> Option<&AreaSeries> {
        self.series.get(id.0)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = SeriesId> {
        (0..self.series.len()).map(SeriesId)
    }

    /// Replace a series' data, returning how many points were plotted
    ///
    /// Points whose time does not parse are skipped. The rest are sorted by
    /// time; equal times keep their input order.
    pub fn set_data(&mut self, id: SeriesId, data: &[DataPoint]) -> usize {
        let Some(series) = self.series.get_mut(id.0) else {
            return 0;
        };

        let mut points: Vec<SeriesPoint> = data
            .iter()
            .filter_map(|p| {
                parse_time(&p.time).map(|time| SeriesPoint {
                    time,
                    value: p.value,
                })
            })
            .collect();
        points.sort_by_key(|p| p.time);

        series.points = points;
        series.points.len()
    }

    /// First and last time across all series
    pub fn data_extent(&self) -> Option<TimeRange> {
        let mut times = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.time));
        let first = times.next()?;
        let (from, to) = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some(TimeRange { from, to })
    }

    /// Make the visible time range equal the data extent
    pub fn fit_content(&mut self) {
        self.visible = self.data_extent();
    }

    pub fn visible_range(&self) -> Option<TimeRange> {
        self.visible
    }

    pub fn plot_area(&self) -> PlotArea {
        let opts = &self.options;
        let time_height = if opts.time_scale.time_visible {
            opts.time_scale.height
        } else {
            0.0
        };

        PlotArea {
            left: 0.0,
            top: PLOT_TOP_INSET,
            width: (opts.width - opts.right_price_scale.width).max(0.0),
            height: (opts.height - time_height - PLOT_TOP_INSET).max(0.0),
        }
    }

    /// Padded min/max of the values inside the visible range
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let visible = self.visible.or_else(|| self.data_extent())?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| p.time >= visible.from && p.time <= visible.to && p.value.is_finite())
        {
            min = min.min(point.value);
            max = max.max(point.value);
        }

        if !min.is_finite() || !max.is_finite() {
            return None;
        }

        let span = max - min;
        let padding = if span > 0.0 { span * VALUE_PADDING } else { 1.0 };
        Some((min - padding, max + padding))
    }

    /// Horizontal position of a time
    pub fn x_for_time(&self, time: i64) -> f64 {
        let area = self.plot_area();
        match self.visible.or_else(|| self.data_extent()) {
            Some(range) if range.to > range.from => {
                let ratio = (time - range.from) as f64 / (range.to - range.from) as f64;
                area.left + ratio * area.width
            }
            _ => area.left + area.width / 2.0,
        }
    }

    /// Vertical position of a value; larger values sit higher
    pub fn y_for_value(&self, value: f64) -> f64 {
        let area = self.plot_area();
        match self.value_range() {
            Some((min, max)) if max > min => area.top + ((max - value) / (max - min)) * area.height,
            _ => area.top + area.height / 2.0,
        }
    }

    /// `count + 1` evenly spaced values from top to bottom of the scale
    pub fn price_ticks(&self, count: usize) -> Vec<f64> {
        let Some((min, max)) = self.value_range() else {
            return Vec::new();
        };
        if count == 0 {
            return vec![max];
        }
        (0..=count)
            .map(|i| max - (i as f64 / count as f64) * (max - min))
            .collect()
    }

    /// `count + 1` evenly spaced times across the visible range
    pub fn time_ticks(&self, count: usize) -> Vec<i64> {
        let Some(range) = self.visible.or_else(|| self.data_extent()) else {
            return Vec::new();
        };
        if count == 0 || range.to == range.from {
            return vec![range.from];
        }
        (0..=count as i64)
            .map(|i| range.from + i * (range.to - range.from) / count as i64)
            .collect()
    }

    /// Index of the point closest to `x` horizontally
    pub fn nearest_index(&self, id: SeriesId, x: f64) -> Option<usize> {
        let series = self.series(id)?;
        series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (self.x_for_time(p.time) - x).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Line vertices of a series in plot coordinates
    pub fn line_path(&self, id: SeriesId) -> Vec<(f64, f64)> {
        self.series(id)
            .map(|s| {
                s.points
                    .iter()
                    .map(|p| (self.x_for_time(p.time), self.y_for_value(p.value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Closed fill polygon: the line plus the two baseline corners
    pub fn area_path(&self, id: SeriesId) -> Vec<(f64, f64)> {
        let mut path = self.line_path(id);
        let (Some(&(first_x, _)), Some(&(last_x, _))) = (path.first(), path.last()) else {
            return path;
        };

        let baseline = self.plot_area().bottom();
        path.push((last_x, baseline));
        path.push((first_x, baseline));
        path
    }
}
