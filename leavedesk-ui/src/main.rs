//! Leavedesk Web Client
//!
//! Login and leave request dashboard built with Leptos (WASM).
//!
//! This is a client-side rendered (CSR) Leptos application. It talks to the
//! leave management API over HTTP and keeps no state beyond each page.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
