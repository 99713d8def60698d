//! Header Component
//!
//! Sticky page header with the dashboard title and an optional count label.

use leptos::*;

/// Dashboard header
#[component]
pub fn Header(
    /// Right-hand label, e.g. "11 indicadores"
    #[prop(into)]
    count: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-10 bg-card border-b border-card-border shadow-sm">
            <div class="max-w-7xl mx-auto px-6 md:px-8 h-20 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class="text-3xl text-primary" data-testid="icon-dashboard">"📊"</span>
                    <h1 class="text-3xl font-bold text-foreground" data-testid="text-page-title">
                        "Dashboard Económico"
                    </h1>
                </div>

                {move || count.get().map(|label| view! {
                    <div class="text-sm text-muted-foreground" data-testid="text-indicator-count">
                        {label}
                    </div>
                })}
            </div>
        </header>
    }
}
