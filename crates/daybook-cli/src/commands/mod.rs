pub mod browse;
pub mod edit;
pub mod extract;
pub mod report;
pub mod worksheet;
