//! Login Page
//!
//! Email field and a button that goes straight to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::app::DASHBOARD_PATH;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let navigate = use_navigate();

    // no validation; the email never leaves this page
    let on_login = move |_| navigate(DASHBOARD_PATH, Default::default());

    view! {
        <div class="flex flex-col justify-center min-h-[80vh]">
            <h1 class="text-2xl font-bold mb-3">"Login"</h1>
            <input
                type="email"
                placeholder="Enter your email"
                class="border border-gray-300 p-2 rounded mb-3"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button
                class="px-4 py-2 bg-blue-600 text-white rounded"
                on:click=on_login
            >
                "Login"
            </button>
        </div>
    }
}
