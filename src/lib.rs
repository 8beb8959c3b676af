#![warn(missing_docs)]
//! A library for multi-agent deep deterministic policy gradient (MADDPG) training.
//!
//! The crate provides the learning-coordination core of MADDPG: a shared
//! experience replay buffer and a coordinator that owns a set of independent
//! actor-critic agents, records their transitions into the shared buffer and
//! triggers their optimization steps. The agents themselves, including their
//! network architectures and optimizers, are opaque to this crate and plugged
//! in through the [`Agent`] trait. The outer training loop, which steps the
//! environment and keeps episode statistics, is likewise left to the caller.
pub mod error;
pub mod maddpg;
pub mod replay_buffer;

mod base;
pub use base::{Agent, ModelParams};
