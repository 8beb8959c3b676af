//! Batch of transitions sampled from the replay buffer.

/// A batch of transitions, stored column-wise.
///
/// Each field groups one component of the sampled transitions: row `j` of a
/// batch of size `n` consists of `obs[j * obs_dim..(j + 1) * obs_dim]`,
/// `act[j * act_dim..(j + 1) * act_dim]`, `reward[j]`, the corresponding
/// slice of `next_obs` and `is_done[j]`. Done flags are encoded as `0`/`1`
/// so the batch can be handed to numeric backends unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionBatch {
    /// Observations, row-major `(len, obs_dim)`.
    pub obs: Vec<f32>,

    /// Actions, row-major `(len, act_dim)`.
    pub act: Vec<f32>,

    /// Next observations, row-major `(len, obs_dim)`.
    pub next_obs: Vec<f32>,

    /// Rewards.
    pub reward: Vec<f32>,

    /// Done flags, `0` or `1`.
    pub is_done: Vec<i8>,

    /// Dimension of a single observation.
    pub obs_dim: usize,

    /// Dimension of a single action.
    pub act_dim: usize,
}

impl TransitionBatch {
    /// Returns the number of transitions in the batch.
    pub fn len(&self) -> usize {
        self.reward.len()
    }

    /// Returns `true` if the batch contains no transitions.
    pub fn is_empty(&self) -> bool {
        self.reward.is_empty()
    }

    /// Unpacks the columns `(o_t, a_t, o_t+1, r_t, is_done_t)`.
    pub fn unpack(self) -> (Vec<f32>, Vec<f32>, Vec<f32>, Vec<f32>, Vec<i8>) {
        (self.obs, self.act, self.next_obs, self.reward, self.is_done)
    }

    /// Returns the observation of row `j` of the batch.
    pub fn obs_row(&self, j: usize) -> &[f32] {
        &self.obs[j * self.obs_dim..(j + 1) * self.obs_dim]
    }

    /// Returns the action of row `j` of the batch.
    pub fn act_row(&self, j: usize) -> &[f32] {
        &self.act[j * self.act_dim..(j + 1) * self.act_dim]
    }

    /// Returns the next observation of row `j` of the batch.
    pub fn next_obs_row(&self, j: usize) -> &[f32] {
        &self.next_obs[j * self.obs_dim..(j + 1) * self.obs_dim]
    }
}
