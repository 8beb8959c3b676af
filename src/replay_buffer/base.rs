//! Fixed-capacity replay buffer with uniform random sampling.
use super::{ReplayBufferConfig, TransitionBatch};
use crate::error::MaddpgError;
use rand::{rngs::StdRng, seq::index, SeedableRng};

/// A fixed-capacity replay buffer of single-agent transitions.
///
/// Transitions are stored column-wise in pre-allocated ring storage: once the
/// buffer reaches its capacity, each new transition overwrites the oldest one.
/// [`sample`](Self::sample) draws `batch_size` transitions uniformly at
/// random without replacement, using a private random number generator seeded
/// at construction so that runs are reproducible given the same seed.
///
/// Uniform sampling breaks the temporal correlation between consecutive
/// transitions, while the FIFO eviction bounds memory and keeps the stored
/// experience biased toward recent behavior once the buffer has filled.
pub struct ReplayBuffer {
    capacity: usize,
    batch_size: usize,
    obs_dim: usize,
    act_dim: usize,
    i: usize,
    size: usize,
    obs: Vec<f32>,
    act: Vec<f32>,
    next_obs: Vec<f32>,
    reward: Vec<f32>,
    is_done: Vec<i8>,
    rng: StdRng,
}

impl ReplayBuffer {
    /// Builds a replay buffer from the given configuration.
    pub fn build(config: &ReplayBufferConfig) -> Self {
        let capacity = config.capacity;
        Self {
            capacity,
            batch_size: config.batch_size,
            obs_dim: config.obs_dim,
            act_dim: config.act_dim,
            i: 0,
            size: 0,
            obs: vec![0.; capacity * config.obs_dim],
            act: vec![0.; capacity * config.act_dim],
            next_obs: vec![0.; capacity * config.obs_dim],
            reward: vec![0.; capacity],
            is_done: vec![0; capacity],
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Appends a transition, evicting the oldest one when at capacity.
    ///
    /// The vector lengths are checked against the configured dimensions and a
    /// [`MaddpgError::ShapeMismatch`] is returned on disagreement, so that
    /// malformed transitions fail here rather than inside the learning math.
    pub fn add(
        &mut self,
        obs: &[f32],
        act: &[f32],
        reward: f32,
        next_obs: &[f32],
        done: bool,
    ) -> Result<(), MaddpgError> {
        check_dim("state", obs, self.obs_dim)?;
        check_dim("action", act, self.act_dim)?;
        check_dim("next_state", next_obs, self.obs_dim)?;

        let (o, a) = (self.i * self.obs_dim, self.i * self.act_dim);
        self.obs[o..o + self.obs_dim].copy_from_slice(obs);
        self.act[a..a + self.act_dim].copy_from_slice(act);
        self.next_obs[o..o + self.obs_dim].copy_from_slice(next_obs);
        self.reward[self.i] = reward;
        self.is_done[self.i] = done as i8;

        self.i = (self.i + 1) % self.capacity;
        if self.size < self.capacity {
            self.size += 1;
        }

        Ok(())
    }

    /// Samples a batch of `batch_size` transitions uniformly at random.
    ///
    /// Within one batch no transition is drawn twice; successive calls draw
    /// independently. Fails with [`MaddpgError::NotEnoughSamples`] while the
    /// buffer holds fewer than `batch_size` transitions.
    pub fn sample(&mut self) -> Result<TransitionBatch, MaddpgError> {
        if self.size < self.batch_size {
            return Err(MaddpgError::NotEnoughSamples {
                len: self.size,
                batch_size: self.batch_size,
            });
        }

        let ixs = index::sample(&mut self.rng, self.size, self.batch_size).into_vec();

        Ok(TransitionBatch {
            obs: self.sample_rows(&self.obs, &ixs, self.obs_dim),
            act: self.sample_rows(&self.act, &ixs, self.act_dim),
            next_obs: self.sample_rows(&self.next_obs, &ixs, self.obs_dim),
            reward: ixs.iter().map(|&ix| self.reward[ix]).collect(),
            is_done: ixs.iter().map(|&ix| self.is_done[ix]).collect(),
            obs_dim: self.obs_dim,
            act_dim: self.act_dim,
        })
    }

    /// Returns the current number of stored transitions.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer contains no transitions.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of transitions drawn per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn sample_rows(&self, col: &[f32], ixs: &[usize], dim: usize) -> Vec<f32> {
        let mut rows = Vec::with_capacity(ixs.len() * dim);
        for &ix in ixs.iter() {
            rows.extend_from_slice(&col[ix * dim..(ix + 1) * dim]);
        }
        rows
    }
}

fn check_dim(what: &'static str, v: &[f32], dim: usize) -> Result<(), MaddpgError> {
    if v.len() != dim {
        return Err(MaddpgError::ShapeMismatch {
            what,
            expected: dim,
            got: v.len(),
        });
    }
    Ok(())
}
