/// Batch driver and command-line surface of levelsmith.

pub mod batch;
pub mod cli;
pub mod inputs;
pub mod output;
pub mod report;
