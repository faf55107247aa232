pub mod job;
pub mod pricing;
