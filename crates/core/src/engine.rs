//! Main diff engine that orchestrates a comparison

use crate::config::RedlineConfig;
use crate::diff::DiffResult;
use crate::processor::Processor;
use crate::stats::Stats;

/// The main diff engine
///
/// Stateless apart from its configuration; one engine can serve any
/// number of comparisons, from several threads at once.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    config: RedlineConfig,
    processor: Box<dyn Processor>,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: RedlineConfig) -> Self {
        let processor = config.build_processor();
        Self { config, processor }
    }

    pub fn config(&self) -> &RedlineConfig {
        &self.config
    }

    /// Compute the diff between two strings
    ///
    /// 1. Segment and tokenize both texts (processor)
    /// 2. Align the token sequences of every chunk pair
    /// 3. Return the chunk pairs with their operations
    pub fn diff(&self, source: &str, test: &str) -> DiffResult {
        let chunks = self.processor.process(source, test);
        tracing::debug!(
            processor = self.processor.name(),
            chunks = chunks.len(),
            "diff computed"
        );
        DiffResult::new(source.to_string(), test.to_string(), chunks)
    }

    /// Stats of `result` under this engine's configuration
    pub fn stats(&self, result: &DiffResult) -> Stats {
        result.stats(self.config.compute_edit_distance)
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(RedlineConfig::default())
    }
}
