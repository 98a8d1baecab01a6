pub mod report_creation_error;
pub mod report_creator;
pub mod report_format;
