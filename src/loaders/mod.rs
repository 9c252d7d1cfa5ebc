pub mod model;

pub use model::{probe_model, ModelSummary};
