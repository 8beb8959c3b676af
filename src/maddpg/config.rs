//! Configuration of [`Maddpg`](super::Maddpg).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Maddpg`](super::Maddpg).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct MaddpgConfig {
    /// Number of agents.
    pub num_agents: usize,

    /// Dimension of the state space of a single agent.
    pub state_size: usize,

    /// Dimension of the action space of a single agent.
    pub action_size: usize,

    /// Random seed for replay sampling and, through the agent factory, for
    /// weight initialization and action noise.
    ///
    /// The same value is handed to every agent, so all agents start from
    /// correlated random streams. Callers wanting independent streams per
    /// agent should diversify the seed inside their factory.
    pub seed: Option<u64>,

    /// Capacity of the shared replay buffer.
    pub buffer_size: usize,

    /// Batch size for the optimization steps.
    pub batch_size: usize,

    /// Discount factor.
    pub gamma: f32,

    /// The minimum number of stored transitions before training starts.
    pub min_samples_before_train: usize,
}

impl MaddpgConfig {
    /// Creates a configuration for `num_agents` agents with the given state
    /// and action dimensions; the remaining fields take their defaults.
    pub fn new(num_agents: usize, state_size: usize, action_size: usize) -> Self {
        Self {
            num_agents,
            state_size,
            action_size,
            seed: None,
            buffer_size: 100_000,
            batch_size: 128,
            gamma: 0.99,
            min_samples_before_train: 5_000,
        }
    }

    /// Sets the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the capacity of the shared replay buffer.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the discount factor.
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the warm-up threshold in stored transitions.
    pub fn min_samples_before_train(mut self, min_samples_before_train: usize) -> Self {
        self.min_samples_before_train = min_samples_before_train;
        self
    }

    /// Constructs [`MaddpgConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`MaddpgConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
