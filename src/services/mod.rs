//! Service implementations for the Xtreme API.

mod assignments;

pub use assignments::{AssignmentsService, ASSIGNMENTS_PATH};
