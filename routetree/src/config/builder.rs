//! Configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds the effective configuration from files, environment, and
/// programmatic overrides.
///
/// # Examples
///
/// ```no_run
/// use routetree::config::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_working_dir(Path::new("/path/to/project"))
///     .build()
///     .unwrap();
/// println!("base path: {}", config.base_path());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder using the current directory and default user config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover project configuration starting from `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load the user configuration from `dir` instead of `~/.routetree`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Load an explicit configuration file above the discovered ones.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Skip user and project configuration discovery.
    ///
    /// An explicit file set with [`with_config_file`](Self::with_config_file)
    /// is still loaded.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip `ROUTETREE_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, or
    /// if an environment override is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
        }

        if let Some(path) = self.config_file {
            let config = ConfigLoader::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence: 4,
                config,
            });
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Ok(config)
    }
}
