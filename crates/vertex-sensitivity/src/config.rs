//! Configuration for sensitivity aggregation.

use serde::{Deserialize, Serialize};

use crate::error::{SensitivityError, SensitivityResult};

/// Configuration for sensitivity aggregation.
///
/// Controls whether large inputs are grouped on the rayon thread pool. Keys
/// and ordering of the result do not depend on these settings; summed values
/// may differ in the last bits because partial sums are formed per chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum number of sensitivities to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Number of sensitivities grouped per parallel task.
    pub chunk_size: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 10_000,
            chunk_size: 4096,
        }
    }
}

impl AggregationConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the number of sensitivities per parallel task.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size` is zero.
    pub fn validate(&self) -> SensitivityResult<()> {
        if self.chunk_size == 0 {
            return Err(SensitivityError::invalid_config("chunk_size", "must be positive"));
        }
        Ok(())
    }

    /// Parses and validates a config from TOML. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml_str(text: &str) -> SensitivityResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a config from JSON. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or fails validation.
    pub fn from_json_str(text: &str) -> SensitivityResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AggregationConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 10_000);
        assert_eq!(config.chunk_size, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sequential() {
        let config = AggregationConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(1_000_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AggregationConfig::new()
            .with_parallel(true)
            .with_threshold(50)
            .with_chunk_size(8);

        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 50);
        assert_eq!(config.chunk_size, 8);
    }

    #[test]
    fn test_should_parallelize() {
        let config = AggregationConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
            assert!(config.should_parallelize(500));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
            assert!(!config.should_parallelize(500));
        }
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = AggregationConfig::new().with_chunk_size(0).validate().unwrap_err();
        assert!(matches!(err, SensitivityError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_toml() {
        let config = AggregationConfig::from_toml_str(
            r#"
            parallel = false
            chunk_size = 128
            "#,
        )
        .unwrap();
        assert!(!config.parallel);
        assert_eq!(config.chunk_size, 128);
        assert_eq!(config.parallel_threshold, 10_000);

        assert!(AggregationConfig::from_toml_str("chunk_size = 0").is_err());
        assert!(matches!(
            AggregationConfig::from_toml_str("parallel = \"yes\""),
            Err(SensitivityError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_serde() {
        let config = AggregationConfig::new().with_threshold(75);

        let json = serde_json::to_string(&config).unwrap();
        let parsed = AggregationConfig::from_json_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(AggregationConfig::from_json_str("{}").unwrap(), AggregationConfig::default());
    }
}
