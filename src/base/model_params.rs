//! Serializable network parameters.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

/// Parameters of a feedforward network, one weight and bias matrix per layer.
///
/// The matrices are stored row-major as nested vectors, which keeps the type
/// backend-agnostic: agents convert from and to their own tensor types at the
/// boundary. Instances are persisted with [`save`](Self::save) and restored
/// with [`load`](Self::load) using `bincode`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct ModelParams {
    /// Weights of layers.
    pub ws: Vec<Vec<f32>>,

    /// Biases of layers.
    pub bs: Vec<Vec<f32>>,
}

impl ModelParams {
    /// Saves the parameters to the given path, overwriting an existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(&bincode::serialize(&self)?)?;
        Ok(())
    }

    /// Loads parameters previously written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut buf = Vec::<u8>::new();
        file.read_to_end(&mut buf)?;
        let params = bincode::deserialize(&buf[..])?;
        Ok(params)
    }
}
