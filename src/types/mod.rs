pub mod config;
pub mod feature;
pub mod report;
pub mod sprint;
