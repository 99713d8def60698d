//! Loading Component
//!
//! Skeleton states shown while the indicator list is in flight.

use leptos::*;

/// Skeleton loader for an indicator card
#[component]
pub fn CardSkeleton(index: usize) -> impl IntoView {
    view! {
        <div
            class="h-[340px] bg-card rounded-lg border border-card-border animate-pulse p-6"
            data-testid=format!("skeleton-card-{}", index)
        >
            <div class="h-5 bg-muted rounded w-2/3 mb-6" />
            <div class="h-8 bg-muted rounded w-1/2 mb-6" />
            <div class="h-[200px] bg-muted rounded" />
        </div>
    }
}
