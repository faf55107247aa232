pub mod completion;
pub mod pricing;
pub mod prompt;
pub mod workers_ai;
