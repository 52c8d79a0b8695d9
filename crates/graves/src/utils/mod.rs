pub mod color;
pub mod file;
pub mod report;
