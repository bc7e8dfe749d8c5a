mod prepare;
mod samples;

pub use prepare::{PrepareArgs, handle_prepare, prepare};
pub use samples::{SamplesReport, create_samples, handle_create_samples};
