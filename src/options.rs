use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::randomizer::{EntropyRandomizer, Randomizer};

/// Errors that prevent a configuration from being built.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The default entropy source could not be seeded.
    #[error("failed to seed default entropy source: {0}")]
    Entropy(#[from] rand::Error),
}

/// A configuration option for [`TraceCore`](crate::TraceCore).
///
/// Options are applied in the order given; later options win.
pub enum TraceOption {
    /// Override the randomness capability used for id generation.
    Randomizer(Box<dyn Randomizer + Send + Sync>),
    /// Set the collector's flush thresholds.
    Batching {
        /// Maximum age of a batch before it is flushed.
        max_age: Duration,
        /// Maximum number of spans in a batch before it is flushed.
        max_count: usize,
    },
}

impl TraceOption {
    /// Use the given randomness capability instead of the default entropy
    /// source.
    ///
    /// The capability must be safe for concurrent use; that is a precondition
    /// on the caller, not checked here.
    pub fn randomizer<R: Randomizer + Send + Sync + 'static>(rand: R) -> Self {
        TraceOption::Randomizer(Box::new(rand))
    }

    /// Batch spans in the collector until one of the given thresholds is hit.
    pub fn batching(max_age: Duration, max_count: usize) -> Self {
        TraceOption::Batching { max_age, max_count }
    }
}

impl fmt::Debug for TraceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceOption::Randomizer(_) => f.write_str("Randomizer(..)"),
            TraceOption::Batching { max_age, max_count } => f
                .debug_struct("Batching")
                .field("max_age", max_age)
                .field("max_count", max_count)
                .finish(),
        }
    }
}

pub(crate) struct Config {
    pub(crate) rand: Box<dyn Randomizer + Send + Sync>,
    pub(crate) batch_time: Duration,
    pub(crate) batch_count: usize,
}

impl Config {
    // Defaults plus options, applied in order. A fresh entropy source is
    // seeded only when no randomizer override is present; each configuration
    // owns its own source.
    pub(crate) fn from_options(options: Vec<TraceOption>) -> Result<Self, ConfigError> {
        let mut rand: Option<Box<dyn Randomizer + Send + Sync>> = None;
        let mut batch_time = Duration::from_secs(0);
        let mut batch_count = 0;

        for opt in options {
            match opt {
                TraceOption::Randomizer(r) => rand = Some(r),
                TraceOption::Batching { max_age, max_count } => {
                    batch_time = max_age;
                    batch_count = max_count;
                }
            }
        }

        let rand: Box<dyn Randomizer + Send + Sync> = match rand {
            Some(rand) => rand,
            None => Box::new(EntropyRandomizer::new()?),
        };

        Ok(Config {
            rand,
            batch_time,
            batch_count,
        })
    }
}
