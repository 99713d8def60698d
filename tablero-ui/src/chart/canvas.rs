//! Canvas Chart Surface
//!
//! Paints a [`ChartModel`] onto an HTML5 canvas appended to a container
//! element. The surface owns its canvas and its mouse listeners; `remove`
//! detaches both and is safe to call more than once.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

use super::model::{format_time_label, ChartModel, SeriesId};
use super::options::{AreaSeriesOptions, ChartOptions, ChartTheme, CrosshairLineOptions};
use crate::format::format_value;
use crate::state::DataPoint;

const PRICE_TICKS: usize = 4;
const TIME_TICKS: usize = 4;

type MouseListener = Closure<dyn FnMut(MouseEvent)>;

/// Read the chart palette from the document's CSS custom properties
pub fn theme_from_document() -> ChartTheme {
    let read = || -> Option<(String, String, String)> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        let style = window.get_computed_style(&root).ok()??;
        let var = |name: &str| style.get_property_value(name).unwrap_or_default();
        Some((var("--primary"), var("--border"), var("--muted-foreground")))
    };

    match read() {
        Some((primary, border, muted)) => ChartTheme::from_css_vars(&primary, &border, &muted),
        None => ChartTheme::default(),
    }
}

struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    model: ChartModel,
    /// Snapped crosshair position in CSS pixels
    crosshair: Option<(f64, f64)>,
    listeners: Vec<(&'static str, MouseListener)>,
    removed: bool,
}

/// Area chart drawn on a canvas
pub struct CanvasChart {
    surface: Rc<RefCell<Surface>>,
}

impl CanvasChart {
    /// Create a canvas inside `container` sized to `options`
    pub fn create(container: &HtmlElement, options: ChartOptions) -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "No document available".to_string())?;

        let canvas = document
            .create_element("canvas")
            .map_err(js_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Created element is not a canvas".to_string())?;

        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| "Canvas 2D context unavailable".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Unexpected canvas context type".to_string())?;

        canvas.set_class_name("block");
        container.append_child(&canvas).map_err(js_error)?;

        let surface = Rc::new(RefCell::new(Surface {
            canvas,
            ctx,
            model: ChartModel::new(options),
            crosshair: None,
            listeners: Vec::new(),
            removed: false,
        }));

        attach_listeners(&surface)?;

        let chart = Self { surface };
        chart.resize_canvas();
        chart.redraw();
        Ok(chart)
    }

    pub fn add_area_series(&self, options: AreaSeriesOptions) -> SeriesId {
        self.surface.borrow_mut().model.add_area_series(options)
    }

    /// Replace a series' data, returning the number of plotted points
    pub fn set_data(&self, id: SeriesId, data: &[DataPoint]) -> usize {
        let plotted = self.surface.borrow_mut().model.set_data(id, data);
        if plotted < data.len() {
            web_sys::console::warn_1(
                &format!(
                    "chart: skipped {} point(s) with unparseable time",
                    data.len() - plotted
                )
                .into(),
            );
        }
        self.redraw();
        plotted
    }

    /// Fit the visible time range to the data extent
    pub fn fit_content(&self) {
        self.surface.borrow_mut().model.fit_content();
        self.redraw();
    }

    pub fn apply_options(&self, options: ChartOptions) {
        self.surface.borrow_mut().model.apply_options(options);
        self.resize_canvas();
        self.redraw();
    }

    /// Change only the width, keeping every other option
    pub fn resize(&self, width: f64) {
        let options = self.surface.borrow().model.options().with_width(width);
        self.apply_options(options);
    }

    /// Detach listeners and the canvas
    pub fn remove(&self) {
        let mut surface = self.surface.borrow_mut();
        if surface.removed {
            return;
        }
        surface.removed = true;

        let canvas = surface.canvas.clone();
        for (event, listener) in surface.listeners.drain(..) {
            let _ = canvas
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        canvas.remove();
    }

    fn resize_canvas(&self) {
        let surface = self.surface.borrow();
        let options = surface.model.options();
        let ratio = device_pixel_ratio();

        surface.canvas.set_width((options.width * ratio).round() as u32);
        surface.canvas.set_height((options.height * ratio).round() as u32);

        let style = surface.canvas.style();
        let _ = style.set_property("width", &format!("{}px", options.width));
        let _ = style.set_property("height", &format!("{}px", options.height));
    }

    fn redraw(&self) {
        draw(&self.surface.borrow());
    }
}

fn attach_listeners(surface: &Rc<RefCell<Surface>>) -> Result<(), String> {
    let weak = Rc::downgrade(surface);
    let on_move: MouseListener = Closure::new(move |ev: MouseEvent| {
        with_live_surface(&weak, |s| {
            let x = ev.offset_x() as f64;
            s.crosshair = snap_crosshair(&s.model, x);
        });
    });

    let weak = Rc::downgrade(surface);
    let on_leave: MouseListener = Closure::new(move |_ev: MouseEvent| {
        with_live_surface(&weak, |s| s.crosshair = None);
    });

    let mut s = surface.borrow_mut();
    let canvas = s.canvas.clone();
    for (event, listener) in [("mousemove", on_move), ("mouseleave", on_leave)] {
        canvas
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(js_error)?;
        s.listeners.push((event, listener));
    }
    Ok(())
}

/// Run `update` on a surface that still exists and is attached, then redraw
fn with_live_surface(weak: &Weak<RefCell<Surface>>, update: impl FnOnce(&mut Surface)) {
    let Some(surface) = weak.upgrade() else {
        return;
    };
    // A listener firing while another borrow is active is dropped
    let Ok(mut s) = surface.try_borrow_mut() else {
        return;
    };
    if s.removed {
        return;
    }
    update(&mut s);
    draw(&s);
}

/// Crosshair sits on the data point nearest to the pointer
fn snap_crosshair(model: &ChartModel, x: f64) -> Option<(f64, f64)> {
    let id = model.series_ids().next()?;
    let index = model.nearest_index(id, x)?;
    let point = model.series(id)?.points.get(index)?;
    Some((model.x_for_time(point.time), model.y_for_value(point.value)))
}

fn draw(surface: &Surface) {
    if surface.removed {
        return;
    }

    let ctx = &surface.ctx;
    let model = &surface.model;
    let options = model.options();
    let ratio = device_pixel_ratio();

    let _ = ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, options.width, options.height);

    if options.layout.background != "transparent" {
        ctx.set_fill_style(&options.layout.background.as_str().into());
        ctx.fill_rect(0.0, 0.0, options.width, options.height);
    }

    draw_grid(ctx, model);

    for id in model.series_ids() {
        draw_area(ctx, model, id);
    }

    draw_scales(ctx, model);

    if let Some((x, y)) = surface.crosshair {
        draw_crosshair(ctx, model, x, y);
    }
}

fn draw_grid(ctx: &CanvasRenderingContext2d, model: &ChartModel) {
    let grid = &model.options().grid;
    let area = model.plot_area();

    ctx.set_line_width(1.0);
    set_dash(ctx, &[]);

    if grid.horz_lines.visible {
        ctx.set_stroke_style(&grid.horz_lines.color.as_str().into());
        for value in model.price_ticks(PRICE_TICKS) {
            let y = model.y_for_value(value).round() + 0.5;
            ctx.begin_path();
            ctx.move_to(area.left, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
        }
    }

    if grid.vert_lines.visible {
        ctx.set_stroke_style(&grid.vert_lines.color.as_str().into());
        for time in model.time_ticks(TIME_TICKS) {
            let x = model.x_for_time(time).round() + 0.5;
            ctx.begin_path();
            ctx.move_to(x, area.top);
            ctx.line_to(x, area.bottom());
            ctx.stroke();
        }
    }
}

fn draw_area(ctx: &CanvasRenderingContext2d, model: &ChartModel, id: SeriesId) {
    let Some(series) = model.series(id) else {
        return;
    };
    let line = model.line_path(id);
    if line.is_empty() {
        return;
    }

    let area = model.plot_area();
    let gradient = ctx.create_linear_gradient(0.0, area.top, 0.0, area.bottom());
    let _ = gradient.add_color_stop(0.0, &series.options.top_color);
    let _ = gradient.add_color_stop(1.0, &series.options.bottom_color);

    trace(ctx, &model.area_path(id));
    ctx.close_path();
    ctx.set_fill_style(&gradient);
    ctx.fill();

    trace(ctx, &line);
    set_dash(ctx, &[]);
    ctx.set_stroke_style(&series.options.line_color.as_str().into());
    ctx.set_line_width(series.options.line_width);
    ctx.set_line_join("round");
    ctx.stroke();
}

fn draw_scales(ctx: &CanvasRenderingContext2d, model: &ChartModel) {
    let options = model.options();
    let area = model.plot_area();

    ctx.set_font(&options.layout.font);
    ctx.set_fill_style(&options.layout.text_color.as_str().into());

    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    for value in model.price_ticks(PRICE_TICKS) {
        let _ = ctx.fill_text(&format_value(value), area.right() + 6.0, model.y_for_value(value));
    }

    if options.time_scale.time_visible {
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        let y = area.bottom() + 6.0;
        for time in model.time_ticks(TIME_TICKS) {
            let x = model
                .x_for_time(time)
                .clamp(area.left + 24.0, (area.right() - 24.0).max(area.left + 24.0));
            let _ = ctx.fill_text(&format_time_label(time), x, y);
        }
    }

    set_dash(ctx, &[]);
    ctx.set_line_width(1.0);
    if options.right_price_scale.border_visible {
        ctx.set_stroke_style(&options.layout.text_color.as_str().into());
        ctx.begin_path();
        ctx.move_to(area.right() + 0.5, area.top);
        ctx.line_to(area.right() + 0.5, area.bottom());
        ctx.stroke();
    }
    if options.time_scale.border_visible {
        ctx.set_stroke_style(&options.layout.text_color.as_str().into());
        ctx.begin_path();
        ctx.move_to(area.left, area.bottom() + 0.5);
        ctx.line_to(area.right(), area.bottom() + 0.5);
        ctx.stroke();
    }
}

fn draw_crosshair(ctx: &CanvasRenderingContext2d, model: &ChartModel, x: f64, y: f64) {
    let area = model.plot_area();
    let crosshair = &model.options().crosshair;

    stroke_crosshair_line(ctx, &crosshair.vert_line, (x, area.top), (x, area.bottom()));
    stroke_crosshair_line(ctx, &crosshair.horz_line, (area.left, y), (area.right(), y));
    set_dash(ctx, &[]);
}

fn stroke_crosshair_line(
    ctx: &CanvasRenderingContext2d,
    line: &CrosshairLineOptions,
    from: (f64, f64),
    to: (f64, f64),
) {
    set_dash(ctx, line.style.dash_pattern());
    ctx.set_stroke_style(&line.color.as_str().into());
    ctx.set_line_width(line.width);
    ctx.begin_path();
    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.stroke();
}

fn trace(ctx: &CanvasRenderingContext2d, path: &[(f64, f64)]) {
    ctx.begin_path();
    for (i, (x, y)) in path.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
}

fn set_dash(ctx: &CanvasRenderingContext2d, pattern: &[f64]) {
    let segments: js_sys::Array = pattern.iter().map(|s| JsValue::from_f64(*s)).collect();
    let _ = ctx.set_line_dash(&segments);
}

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
