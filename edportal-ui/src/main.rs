//! EdPortal Dashboard
//!
//! Student learning portal built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state lives in the `edportal` view-models; this crate
//! binds them to signals and talks to the backend through a fetch-based
//! gateway.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
