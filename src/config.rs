use std::{error::Error, fmt, time::Duration};

use crate::config::ConfigError::{EmptyBuffer, TooManyElements};

/// Element count of the reference run
pub const DEFAULT_ELEMENTS: usize = 100_000_000;

/// Pause between the sequential and the random pass
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(1);

/// Parameters of a single benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// number of elements in each of the three buffers
    pub elements: usize,
    /// fixed seed for the random index buffer - `None` seeds from the OS
    pub seed: Option<u64>,
    pub cooldown: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            elements: DEFAULT_ELEMENTS,
            seed: None,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

impl BenchConfig {
    #[cfg(test)]
    pub fn with_elements(elements: usize) -> Self {
        BenchConfig {
            elements,
            ..Default::default()
        }
    }

    /// Verify the element count can be represented by the buffers
    ///
    /// The values are stored as `u32`, so the largest value `elements - 1` has to fit into it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elements == 0 {
            return Err(EmptyBuffer());
        }

        if self.elements - 1 > u32::MAX as usize {
            return Err(TooManyElements(self.elements));
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    // the uniform range [0, N-1] would be empty
    EmptyBuffer(),
    TooManyElements(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ConfigError {}
