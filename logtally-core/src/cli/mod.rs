pub mod analyze;
pub mod conf;
