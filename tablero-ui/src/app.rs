//! App Root Component
//!
//! Router with the dashboard and a fallback page.

use leptos::*;
use leptos_router::*;

use crate::components::Header;
use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-background text-foreground">
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Header count=Signal::derive(|| None::<String>) />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Página no encontrada"</h1>
            <p class="text-muted-foreground mb-6">"La página que buscás no existe."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary text-primary-foreground rounded-lg font-medium hover:opacity-90 transition-opacity"
            >
                "Volver al dashboard"
            </A>
        </div>
    }
}
