//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use routetree::config::{Config, ConfigMerger};
///
/// let low = Config { base_path: Some("/low".to_string()), ..Default::default() };
/// let high = Config { base_path: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.base_path(), "/high");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base_path.is_some() {
            target.base_path.clone_from(&source.base_path);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.schema.is_some() {
            target.schema.clone_from(&source.schema);
        }
    }
}
