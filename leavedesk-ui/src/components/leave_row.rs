//! Leave Request Row

use leptos::*;

use crate::api::LeaveRequest;

/// The text lines shown for one request
pub fn row_lines(request: &LeaveRequest) -> [String; 5] {
    [
        format!("User ID: {}", request.user_id),
        format!("Type: {}", request.leave_type),
        format!("Start: {}", request.start_date),
        format!("End: {}", request.end_date),
        format!("Status: {}", request.status),
    ]
}

/// One leave request in the dashboard list
#[component]
pub fn LeaveRow(request: LeaveRequest) -> impl IntoView {
    view! {
        <div class="p-2 border-b border-gray-300">
            {row_lines(&request)
                .into_iter()
                .map(|line| view! { <p>{line}</p> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lines() {
        let request = LeaveRequest {
            id: 1,
            user_id: 7,
            leave_type: "sick".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-03".to_string(),
            status: "approved".to_string(),
        };

        assert_eq!(
            row_lines(&request),
            [
                "User ID: 7",
                "Type: sick",
                "Start: 2024-01-01",
                "End: 2024-01-03",
                "Status: approved",
            ]
            .map(String::from)
        );
    }
}
