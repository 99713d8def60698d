//! Chart Component
//!
//! Area chart of one indicator series. The canvas and the window resize
//! listener live exactly as long as one set of inputs: any change to data,
//! height or grid flag tears both down and builds a fresh chart.

use std::rc::Rc;

use leptos::*;

use crate::chart::{theme_from_document, AreaSeriesOptions, CanvasChart, ChartOptions};
use crate::state::DataPoint;

/// Economic series chart
#[component]
pub fn EconomicChart(
    /// Points in time order
    #[prop(into)]
    data: MaybeSignal<Vec<DataPoint>>,
    /// Height in CSS pixels
    #[prop(into, default = MaybeSignal::Static(200.0))]
    height: MaybeSignal<f64>,
    /// Draw grid lines
    #[prop(into, default = MaybeSignal::Static(true))]
    show_grid: MaybeSignal<bool>,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();

    create_effect(move |_| {
        let data = data.get();
        let height = height.get();
        let show_grid = show_grid.get();

        let Some(container) = container_ref.get() else {
            return;
        };
        if data.is_empty() {
            return;
        }

        let theme = theme_from_document();
        let options = ChartOptions::themed(&theme, container.client_width() as f64, height, show_grid);

        let chart = match CanvasChart::create(&container, options) {
            Ok(chart) => Rc::new(chart),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to create chart: {}", e).into());
                return;
            }
        };

        let series = chart.add_area_series(AreaSeriesOptions::themed(&theme));
        chart.set_data(series, &data);
        chart.fit_content();

        let resize_handle = {
            let chart = Rc::clone(&chart);
            let container = container.clone();
            window_event_listener(ev::resize, move |_| {
                chart.resize(container.client_width() as f64);
            })
        };

        on_cleanup(move || {
            resize_handle.remove();
            chart.remove();
        });
    });

    view! {
        <div node_ref=container_ref class="w-full" />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host() -> web_sys::HtmlElement {
        let document = document();
        let host = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        host.style().set_property("width", "480px").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    async fn settle() {
        gloo_timers::future::TimeoutFuture::new(0).await;
    }

    #[wasm_bindgen_test]
    async fn test_empty_data_creates_no_canvas() {
        let host = host();
        mount_to(host.clone(), || view! { <EconomicChart data=Vec::<DataPoint>::new() /> });
        settle().await;

        assert!(host.query_selector("canvas").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_data_creates_one_canvas_at_height() {
        let host = host();
        let data = vec![
            DataPoint { time: "2025-08-01".into(), value: 4.2 },
            DataPoint { time: "2025-10-01".into(), value: 2.7 },
        ];
        mount_to(host.clone(), move || view! { <EconomicChart data=data height=400.0 /> });
        settle().await;

        let canvases = host.query_selector_all("canvas").unwrap();
        assert_eq!(canvases.length(), 1);
        let canvas = host
            .query_selector("canvas")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        assert_eq!(canvas.style().get_property_value("height").unwrap(), "400px");
    }

    #[wasm_bindgen_test]
    async fn test_input_change_replaces_canvas() {
        let host = host();
        let (data, set_data) = create_signal(vec![DataPoint { time: "2025-08-01".into(), value: 1.0 }]);
        mount_to(host.clone(), move || view! { <EconomicChart data=data /> });
        settle().await;

        set_data.set(vec![
            DataPoint { time: "2025-08-01".into(), value: 1.0 },
            DataPoint { time: "2025-09-01".into(), value: 2.0 },
        ]);
        settle().await;

        assert_eq!(host.query_selector_all("canvas").unwrap().length(), 1);
    }
}
