//! Engine limits.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::statevector::MAX_SUPPORTED_QUBITS;

/// Default qubit ceiling: a 24-qubit register is 16M amplitudes (256 MiB),
/// and non-diagonal gates allocate a second vector of the same size.
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// Limits applied when creating engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Largest register an engine may allocate.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: usize,
}

fn default_max_qubits() -> usize {
    DEFAULT_MAX_QUBITS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

impl EngineConfig {
    /// Config with a custom ceiling.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self { max_qubits }
    }

    /// Check that the ceiling itself is usable.
    pub fn validate(&self) -> SimResult<()> {
        if self.max_qubits == 0 {
            return Err(SimError::InvalidQubitCount(0));
        }
        if self.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: self.max_qubits,
                max: MAX_SUPPORTED_QUBITS,
            });
        }
        Ok(())
    }

    /// Check a requested register size against the ceiling.
    pub fn check_qubits(&self, num_qubits: usize) -> SimResult<()> {
        if num_qubits == 0 {
            return Err(SimError::InvalidQubitCount(num_qubits));
        }
        if num_qubits > self.max_qubits {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: self.max_qubits,
            });
        }
        Ok(())
    }
}
