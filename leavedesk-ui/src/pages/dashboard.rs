//! Dashboard Page
//!
//! Lists every leave request. Fetches once on mount; a failure only
//! reaches the browser console.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{self, LeaveRequest};
use crate::components::LeaveRow;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (requests, set_requests) = create_signal(Vec::<LeaveRequest>::new());

    // cleared when the page is torn down; a late response must not touch
    // the disposed signal
    let mounted = Rc::new(Cell::new(true));
    let mounted_for_cleanup = Rc::clone(&mounted);
    on_cleanup(move || mounted_for_cleanup.set(false));

    spawn_local(async move {
        match api::fetch_leave_requests().await {
            Ok(list) => {
                if mounted.get() {
                    set_requests.set(list);
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching leave requests: {}", e).into());
            }
        }
    });

    view! {
        <div class="flex-1">
            <h1 class="text-2xl font-bold mb-3">"Leave Requests"</h1>
            <div>
                <For
                    each=move || requests.get()
                    key=|request| request.id.to_string()
                    children=move |request| view! { <LeaveRow request=request /> }
                />
            </div>
        </div>
    }
}
