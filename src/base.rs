//! Core traits and shared types.
mod agent;
mod model_params;

pub use agent::Agent;
pub use model_params::ModelParams;
