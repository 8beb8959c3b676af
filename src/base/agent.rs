//! Agent.
use super::ModelParams;
use crate::replay_buffer::TransitionBatch;

/// Represents a trainable actor-critic agent.
///
/// The coordinator ([`Maddpg`](crate::maddpg::Maddpg)) depends only on this
/// capability set; the policy and value networks behind it, their optimizers
/// and the exploration noise process are implementation details of the agent.
pub trait Agent {
    /// Computes an action for the given observation.
    ///
    /// When `add_noise` is `true`, the agent adds its exploration noise to
    /// the action before returning it.
    fn act(&mut self, obs: &[f32], add_noise: bool) -> Vec<f32>;

    /// Resets the state of the exploration noise process.
    fn reset(&mut self);

    /// Performs an optimization step on a batch of transitions.
    ///
    /// `gamma` is the discount factor applied to future rewards in the
    /// critic's target computation.
    fn learn(&mut self, batch: &TransitionBatch, gamma: f32);

    /// Returns the parameters of the actor network.
    fn actor_params(&self) -> ModelParams;

    /// Returns the parameters of the critic network.
    fn critic_params(&self) -> ModelParams;
}
