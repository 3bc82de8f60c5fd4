pub mod analyze;
pub mod init;
pub mod quiz;
pub mod report;
pub mod story;
pub mod validate;
