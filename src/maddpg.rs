//! Multi-agent coordinator implementing the MADDPG training protocol.
mod base;
mod config;

pub use base::Maddpg;
pub use config::MaddpgConfig;
