//! Indicator Modal Component
//!
//! Expanded view of the selected indicator. Renders nothing without a
//! target; with one, the overlay follows `open`, so a closing modal keeps its
//! content until the parent drops the target. Closing happens through the
//! close button or Escape, never by clicking outside.

use leptos::*;

use crate::components::chart::EconomicChart;
use crate::components::indicator_card::TrendBadge;
use crate::format::format_value;
use crate::state::EconomicIndicator;

/// Indicator detail overlay
#[component]
pub fn IndicatorModal(
    #[prop(into)]
    indicator: Signal<Option<EconomicIndicator>>,
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_close.call(());
        }
    });
    on_cleanup(move || escape.remove());

    move || {
        indicator.get().map(|indicator| {
            let id = indicator.id.clone();
            let value = format_value(indicator.current_value());
            let trend = indicator.trend_or_zero();

            view! {
                <div
                    class=move || {
                        let base = "fixed inset-0 z-50 flex items-center justify-center p-4 transition-opacity duration-200";
                        if open.get() {
                            format!("{} opacity-100", base)
                        } else {
                            format!("{} opacity-0 pointer-events-none", base)
                        }
                    }
                    role="dialog"
                    aria-modal="true"
                    aria-hidden=move || (!open.get()).to_string()
                >
                    <div class="absolute inset-0 bg-black/60" />

                    <div
                        class="relative bg-card rounded-lg shadow-lg w-full max-w-4xl max-h-[90vh] overflow-y-auto p-8"
                        data-testid=format!("modal-indicator-{}", id)
                    >
                        <div class="flex items-start justify-between gap-4 mb-2">
                            <div class="flex-1 min-w-0">
                                <h2
                                    class="text-3xl font-semibold mb-2"
                                    data-testid=format!("text-modal-title-{}", id)
                                >
                                    {indicator.name.clone()}
                                </h2>
                                <div class="flex items-center gap-4">
                                    <div
                                        class="font-mono text-3xl font-medium text-foreground"
                                        data-testid=format!("text-modal-value-{}", id)
                                    >
                                        {value}
                                        {indicator.unit.clone().map(|unit| view! {
                                            <span class="text-2xl ml-1 text-muted-foreground">{unit}</span>
                                        })}
                                    </div>
                                    <TrendBadge id=id.clone() trend=trend large=true />
                                </div>
                            </div>
                            <button
                                class="flex-shrink-0 w-9 h-9 rounded-md text-xl hover:bg-muted transition-colors"
                                aria-label="Cerrar"
                                data-testid=format!("button-close-modal-{}", id)
                                on:click=move |_| on_close.call(())
                            >
                                "✕"
                            </button>
                        </div>

                        <div class="mt-6 mb-8 h-[400px]" data-testid=format!("chart-expanded-{}", id)>
                            <EconomicChart data=indicator.data.clone() height=400.0 show_grid=true />
                        </div>

                        <p
                            class="text-base leading-relaxed text-foreground"
                            data-testid=format!("text-description-{}", id)
                        >
                            {indicator.description.clone()}
                        </p>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::state::DataPoint;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host() -> web_sys::HtmlElement {
        let document = document();
        let host = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    async fn settle() {
        gloo_timers::future::TimeoutFuture::new(0).await;
    }

    fn indicator() -> EconomicIndicator {
        EconomicIndicator {
            id: "inflacion".to_string(),
            name: "Inflación (IPC mensual)".to_string(),
            description: "Variación mensual del índice de precios".to_string(),
            data: vec![
                DataPoint { time: "2025-08-01".into(), value: 4.2 },
                DataPoint { time: "2025-10-01".into(), value: 2.7 },
            ],
            unit: Some("%".to_string()),
            trend: Some(-0.8),
        }
    }

    /// Mount an open modal and return the host plus a close counter
    fn mount_open(target: Option<EconomicIndicator>) -> (web_sys::HtmlElement, RwSignal<u32>) {
        let host = host();
        let closes = create_rw_signal(0u32);
        let on_close = Callback::new(move |_: ()| closes.update(|n| *n += 1));
        mount_to(host.clone(), move || {
            let (indicator, _) = create_signal(target);
            view! { <IndicatorModal indicator=indicator open=Signal::derive(|| true) on_close=on_close /> }
        });
        (host, closes)
    }

    fn press_escape() {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key("Escape");
        let event =
            web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        window().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_no_target_renders_no_dialog() {
        let (host, _) = mount_open(None);
        settle().await;

        assert!(host.query_selector("[role=dialog]").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_backdrop_click_does_not_close() {
        let (host, closes) = mount_open(Some(indicator()));
        settle().await;

        assert!(host.query_selector("[role=dialog]").unwrap().is_some());
        let backdrop = host
            .query_selector(".bg-black\\/60")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        backdrop.click();
        settle().await;

        assert_eq!(closes.get_untracked(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_escape_closes() {
        let (_host, closes) = mount_open(Some(indicator()));
        settle().await;

        press_escape();
        settle().await;

        assert_eq!(closes.get_untracked(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_close_button_closes() {
        let (host, closes) = mount_open(Some(indicator()));
        settle().await;

        let button = host
            .query_selector("[data-testid=button-close-modal-inflacion]")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        button.click();
        settle().await;

        assert_eq!(closes.get_untracked(), 1);
    }
}
