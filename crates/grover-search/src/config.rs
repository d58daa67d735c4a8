//! Search circuit configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amplification::optimal_iterations;
use crate::error::{GroverError, GroverResult};

/// Rounds used by the reference four-qubit circuit.
pub const FOUR_QUBIT_ITERATIONS: usize = 3;

/// Smallest register a phase flip can be built on (one control, one target).
pub const MIN_QUBITS: u32 = 2;

/// Largest register the builder accepts.
pub const MAX_QUBITS: u32 = 24;

/// Most oracle + diffusion rounds a configuration may ask for.
pub const MAX_ITERATIONS: usize = 1 << 16;

/// Shape of a search circuit.
///
/// Loadable from YAML or JSON:
///
/// ```yaml
/// name: grover
/// num_qubits: 4
/// iterations: 3   # omit to derive the optimal count
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroverConfig {
    /// Name given to built circuits.
    #[serde(default = "default_name")]
    pub name: String,
    /// Register width.
    #[serde(default = "default_num_qubits")]
    pub num_qubits: u32,
    /// Fixed number of oracle + diffusion rounds; `None` derives it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
}

fn default_name() -> String {
    "grover".into()
}

fn default_num_qubits() -> u32 {
    4
}

impl Default for GroverConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            num_qubits: default_num_qubits(),
            iterations: None,
        }
    }
}

impl GroverConfig {
    /// Configuration with the derived iteration count.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            ..Self::default()
        }
    }

    /// The reference four-qubit configuration: three fixed rounds.
    pub fn four_qubit() -> Self {
        Self {
            name: "four_qubit_grover".into(),
            num_qubits: 4,
            iterations: Some(FOUR_QUBIT_ITERATIONS),
        }
    }

    /// Set a fixed iteration count.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Set the circuit name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of rounds the builder will emit.
    pub fn resolved_iterations(&self) -> usize {
        self.iterations
            .unwrap_or_else(|| optimal_iterations(self.num_qubits, 1))
    }

    /// Check the register width and iteration count.
    pub fn validate(&self) -> GroverResult<()> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&self.num_qubits) {
            return Err(GroverError::InvalidQubitCount {
                num_qubits: self.num_qubits,
                min: MIN_QUBITS,
                max: MAX_QUBITS,
            });
        }
        if let Some(iterations) = self.iterations {
            if !(1..=MAX_ITERATIONS).contains(&iterations) {
                return Err(GroverError::InvalidIterations(iterations));
            }
        }
        Ok(())
    }

    /// Parse and validate a YAML configuration.
    pub fn from_yaml_str(source: &str) -> GroverResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(source).map_err(|e| GroverError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(source: &str) -> GroverResult<Self> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| GroverError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file; `.json` is read as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> GroverResult<Self> {
        let path = path.as_ref();
        debug!("Loading search configuration from {}", path.display());
        let source = fs::read_to_string(path)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "json" => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }
}
