//! Multi-agent coordinator.
use super::MaddpgConfig;
use crate::{
    error::MaddpgError,
    replay_buffer::{ReplayBuffer, ReplayBufferConfig, TransitionBatch},
    Agent,
};
use anyhow::Result;
use log::info;
use std::{fs, path::Path};

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Coordinates a set of independent actor-critic agents trained with MADDPG.
///
/// The coordinator owns `num_agents` agent instances and one shared replay
/// buffer. The external training loop drives it as follows:
///
/// 1. Call [`act`](Self::act) with one state per agent and execute the
///    returned actions in the environment.
/// 2. Call [`step`](Self::step) with the resulting per-agent transition
///    tuples. Every agent's transition is recorded into the shared buffer;
///    once the buffer holds more than `min_samples_before_train` transitions,
///    each `step` additionally performs `num_agents` optimization iterations,
///    each drawing a fresh batch and updating every agent with it.
/// 3. Call [`reset`](Self::reset) at episode boundaries to clear the agents'
///    exploration noise processes.
///
/// ```mermaid
/// graph LR
///     A[Agents]-->|actions|B[Env]
///     B -->|states, rewards|A
///     B -->|transitions|C[ReplayBuffer]
///     C -->|TransitionBatch|A
/// ```
///
/// All agents contribute to and sample from the one pooled buffer, regardless
/// of which agent produced a transition, and within one optimization
/// iteration the same sampled batch is handed to every agent's update
/// ([`learn`](Self::learn)). The `num_agents` iterations of a single `step`
/// each draw their own batch.
pub struct Maddpg<A: Agent> {
    num_agents: usize,
    gamma: f32,
    min_samples_before_train: usize,
    agents: Vec<A>,
    buffer: ReplayBuffer,
    warmed_up: bool,
}

impl<A: Agent> Maddpg<A> {
    /// Builds a coordinator from the given configuration.
    ///
    /// The factory `f` is invoked once per agent with the configured
    /// `(state_size, action_size, seed)` triple. The seed value is identical
    /// for every invocation; see [`MaddpgConfig::seed`].
    pub fn build<F>(config: &MaddpgConfig, mut f: F) -> Self
    where
        F: FnMut(usize, usize, Option<u64>) -> A,
    {
        let agents = (0..config.num_agents)
            .map(|_| f(config.state_size, config.action_size, config.seed))
            .collect();

        let buffer = ReplayBuffer::build(
            &ReplayBufferConfig::default()
                .capacity(config.buffer_size)
                .batch_size(config.batch_size)
                .obs_dim(config.state_size)
                .act_dim(config.action_size)
                .seed(config.seed.unwrap_or(42)),
        );

        Self {
            num_agents: config.num_agents,
            gamma: config.gamma,
            min_samples_before_train: config.min_samples_before_train,
            agents,
            buffer,
            warmed_up: false,
        }
    }

    /// Asks each agent to compute an action for its own state.
    ///
    /// The returned actions are index-aligned with `states` and with the
    /// coordinator's agent list.
    pub fn act(&mut self, states: &[Vec<f32>], add_noise: bool) -> Result<Vec<Vec<f32>>> {
        check_len("states", states.len(), self.num_agents)?;

        let actions = states
            .iter()
            .zip(self.agents.iter_mut())
            .map(|(state, agent)| agent.act(state, add_noise))
            .collect();
        Ok(actions)
    }

    /// Resets the exploration noise process of each agent.
    pub fn reset(&mut self) {
        for agent in self.agents.iter_mut() {
            agent.reset();
        }
    }

    /// Records one environment step for all agents and trains when possible.
    ///
    /// All five arguments are per-agent sequences of length `num_agents`,
    /// index-aligned with the agent list. Each agent's transition is appended
    /// to the shared buffer. While the buffer holds no more than
    /// `min_samples_before_train` transitions the call is observation-only;
    /// afterwards it performs `num_agents` optimization iterations, each
    /// sampling an independent fresh batch and passing it to
    /// [`learn`](Self::learn).
    pub fn step(
        &mut self,
        states: &[Vec<f32>],
        actions: &[Vec<f32>],
        rewards: &[f32],
        next_states: &[Vec<f32>],
        dones: &[bool],
    ) -> Result<()> {
        check_len("states", states.len(), self.num_agents)?;
        check_len("actions", actions.len(), self.num_agents)?;
        check_len("rewards", rewards.len(), self.num_agents)?;
        check_len("next_states", next_states.len(), self.num_agents)?;
        check_len("dones", dones.len(), self.num_agents)?;

        for i in 0..self.num_agents {
            self.buffer
                .add(&states[i], &actions[i], rewards[i], &next_states[i], dones[i])?;
        }

        if self.buffer.len() > self.min_samples_before_train {
            if !self.warmed_up {
                info!(
                    "Warm-up finished with {} stored transitions, starting training",
                    self.buffer.len()
                );
                self.warmed_up = true;
            }
            for _ in 0..self.num_agents {
                let batch = self.buffer.sample()?;
                self.learn(&batch, self.gamma);
            }
        }

        Ok(())
    }

    /// Performs one optimization step for every agent on the given batch.
    ///
    /// The same batch is handed to each agent in turn.
    pub fn learn(&mut self, batch: &TransitionBatch, gamma: f32) {
        for agent in self.agents.iter_mut() {
            agent.learn(batch, gamma);
        }
    }

    /// Saves the actor and critic parameters of each agent under `model_dir`.
    ///
    /// Agent `i` is written to `actor_agent_{i}.bincode` and
    /// `critic_agent_{i}.bincode`, overwriting existing files. Writing stops
    /// at the first failure, so a partial roster may remain on disk.
    pub fn save_model_params(&self, model_dir: impl AsRef<Path>) -> Result<()> {
        let model_dir = model_dir.as_ref();
        fs::create_dir_all(model_dir)?;

        for (i, agent) in self.agents.iter().enumerate() {
            agent
                .actor_params()
                .save(model_dir.join(format!("actor_agent_{}.bincode", i)))?;
            agent
                .critic_params()
                .save(model_dir.join(format!("critic_agent_{}.bincode", i)))?;
        }
        info!("Saved model parameters of {} agents in {:?}", self.num_agents, model_dir);

        Ok(())
    }

    /// Returns the number of agents.
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Returns the current number of transitions in the shared buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the shared buffer contains no transitions.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

fn check_len(what: &'static str, got: usize, expected: usize) -> Result<(), MaddpgError> {
    if got != expected {
        return Err(MaddpgError::AgentCountMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
