//! Indicator Card Component
//!
//! Compact view of one indicator: name, latest value, trend and a small
//! chart. The whole card is a single button; it reports activation to the
//! parent and keeps no selection state of its own.

use leptos::*;

use crate::components::chart::EconomicChart;
use crate::format::{format_trend, format_value, TrendDirection};
use crate::state::EconomicIndicator;

/// Keys that activate a focused card
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Indicator card
#[component]
pub fn IndicatorCard(
    indicator: EconomicIndicator,
    /// Fired on click, Enter or Space
    #[prop(into)]
    on_select: Callback<()>,
) -> impl IntoView {
    let value = format_value(indicator.current_value());
    let trend = indicator.trend_or_zero();
    let EconomicIndicator { id, name, unit, data, .. } = indicator;

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            on_select.call(());
        }
    };

    view! {
        <div
            class="bg-card border border-card-border rounded-lg p-6 cursor-pointer transition-all duration-200 hover:shadow-md focus:outline-none focus:ring-2 focus:ring-primary"
            role="button"
            tabindex="0"
            data-testid=format!("card-indicator-{}", id)
            on:click=move |_| on_select.call(())
            on:keydown=on_keydown
        >
            <div class="flex items-start justify-between mb-4 gap-2">
                <div class="flex-1 min-w-0">
                    <h3
                        class="font-semibold text-lg text-foreground truncate"
                        title=name.clone()
                        data-testid=format!("text-name-{}", id)
                    >
                        {name}
                    </h3>
                </div>
                <TrendBadge id=id.clone() trend=trend />
            </div>

            <div class="mb-4">
                <div
                    class="font-mono text-2xl font-medium text-foreground"
                    data-testid=format!("text-value-{}", id)
                >
                    {value}
                    {unit.map(|unit| view! {
                        <span class="text-lg ml-1 text-muted-foreground">{unit}</span>
                    })}
                </div>
            </div>

            <div class="h-[200px]" data-testid=format!("chart-preview-{}", id)>
                <EconomicChart data=data height=200.0 show_grid=false />
            </div>
        </div>
    }
}

/// Trend glyph and percentage, colored by sign
#[component]
pub fn TrendBadge(
    #[prop(into)]
    id: String,
    trend: f64,
    /// Larger variant for the detail overlay
    #[prop(optional)]
    large: bool,
) -> impl IntoView {
    let direction = TrendDirection::of(trend);
    let size = if large { "text-lg" } else { "text-sm" };
    let prefix = if large { "text-modal-trend" } else { "text-trend" };

    view! {
        <div class=format!("flex items-center gap-1 font-medium {} {}", size, direction.color_class())>
            <span data-testid=format!("icon-trend-{}-{}", direction.label(), id)>
                {direction.glyph()}
            </span>
            <span data-testid=format!("{}-{}", prefix, id)>{format_trend(trend)}</span>
        </div>
    }
}
