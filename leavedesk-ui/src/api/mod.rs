//! API Access

mod client;

pub use client::{fetch_leave_requests, LeaveRequest};
