//! Tablero Dashboard
//!
//! Economic indicators dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads indicators from the Tablero API over HTTP and draws
//! each series with a small canvas chart engine. The page logic that does not
//! touch the DOM (view state, selection, formatting, chart model) is plain
//! Rust and tested natively.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
