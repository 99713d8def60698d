//! Dashboard Page
//!
//! Fetches the indicator list once and renders one of four views: skeleton
//! grid, error panel, empty panel or the card grid with its detail modal.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api;
use crate::components::{CardSkeleton, Header, IndicatorCard, IndicatorModal};
use crate::state::{DashboardView, FetchState, Selection, CLEAR_DELAY_MS};

const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6";

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let indicators = create_local_resource(|| (), |_| api::fetch_indicators());
    let selection = create_rw_signal(Selection::default());

    let view_state = create_memo(move |_| {
        DashboardView::from_fetch(FetchState::from_resource(
            indicators.loading().get(),
            indicators.get(),
        ))
    });
    let count = Signal::derive(move || view_state.with(DashboardView::count_label));

    let refetch = Callback::new(move |_: ()| indicators.refetch());

    let selected = create_memo(move |_| selection.with(|s| s.selected().cloned()));
    let open = Signal::derive(move || selection.with(Selection::is_open));

    let close = Callback::new(move |_: ()| {
        let Some(ticket) = selection.try_update(Selection::close) else {
            return;
        };
        // Page may be gone by the time this fires; try_update tolerates that
        Timeout::new(CLEAR_DELAY_MS, move || {
            selection.try_update(|s| s.clear(ticket));
        })
        .forget();
    });

    view! {
        <div class="min-h-screen bg-background" data-testid="page-dashboard">
            <Header count=count />

            <main class="max-w-7xl mx-auto px-6 md:px-8 py-8 md:py-12">
                {move || match view_state.get() {
                    DashboardView::Loading { placeholders } => view! {
                        <div class=GRID_CLASS>
                            {(0..placeholders)
                                .map(|index| view! { <CardSkeleton index=index /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                    DashboardView::Error { message } => view! {
                        <ErrorPanel message=message on_retry=refetch />
                    }
                    .into_view(),
                    DashboardView::Empty => view! { <EmptyPanel on_refresh=refetch /> }.into_view(),
                    DashboardView::Populated { indicators } => view! {
                        <div class=GRID_CLASS data-testid="grid-indicators">
                            {indicators
                                .into_iter()
                                .map(|indicator| {
                                    let target = indicator.clone();
                                    let on_select = move |_: ()| {
                                        let target = target.clone();
                                        selection.update(|s| s.select(target));
                                    };
                                    view! { <IndicatorCard indicator=indicator on_select=on_select /> }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                }}
            </main>

            <IndicatorModal indicator=selected open=open on_close=close />
        </div>
    }
}

/// Fetch failure panel with a retry action
#[component]
fn ErrorPanel(message: Option<String>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border border-destructive/50 bg-destructive/5 p-6 text-destructive"
            role="alert"
            data-testid="alert-error"
        >
            <h2 class="text-lg font-semibold">"Error al cargar los indicadores"</h2>
            <p class="mt-2 mb-4 text-foreground">
                "No se pudieron cargar los datos económicos. Por favor, verifica tu conexión e intenta nuevamente."
            </p>
            {message.map(|message| view! {
                <p class="text-sm text-muted-foreground mb-4" data-testid="text-error-message">
                    "Detalle: " {message}
                </p>
            })}
            <button
                class="mt-2 px-4 py-2 rounded-md border border-input bg-background text-foreground hover:bg-muted transition-colors"
                data-testid="button-retry"
                on:click=move |_| on_retry.call(())
            >
                "↻ Reintentar"
            </button>
        </div>
    }
}

/// Shown when the server answered with an empty list
#[component]
fn EmptyPanel(on_refresh: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-center" data-testid="empty-state">
            <div class="text-6xl text-muted-foreground mb-4">"📉"</div>
            <h2 class="text-2xl font-semibold text-foreground mb-2">
                "No hay indicadores disponibles"
            </h2>
            <p class="text-muted-foreground max-w-md mb-6">
                "No se encontraron datos económicos para mostrar en este momento."
            </p>
            <button
                class="px-4 py-2 rounded-md bg-primary text-primary-foreground hover:opacity-90 transition-opacity"
                data-testid="button-refresh-empty"
                on:click=move |_| on_refresh.call(())
            >
                "↻ Actualizar"
            </button>
        </div>
    }
}
