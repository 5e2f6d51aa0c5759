//! App Root Component
//!
//! Routing between the login and dashboard pages.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Login};

/// Path of the dashboard page
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-white text-gray-900 p-5">
                <Routes>
                    <Route path="/" view=Login />
                    <Route path="/login" view=Login />
                    <Route path=DASHBOARD_PATH view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-2xl font-bold mb-2">"Page Not Found"</h1>
            <A href="/" class="px-4 py-2 border border-gray-300 rounded">
                "Back to login"
            </A>
        </div>
    }
}
