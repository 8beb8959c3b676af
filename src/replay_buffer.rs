//! Replay buffer shared by all agents.
mod base;
mod batch;
mod config;

pub use base::ReplayBuffer;
pub use batch::TransitionBatch;
pub use config::ReplayBufferConfig;
