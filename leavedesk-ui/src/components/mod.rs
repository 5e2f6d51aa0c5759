//! UI Components

pub mod leave_row;

pub use leave_row::LeaveRow;
