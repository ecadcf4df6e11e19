use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ConfigExport, NextSettings};
use crate::error::{Error, Result};

/// Maps a configuration file path to its export.
///
/// Host tools that evaluate config files themselves implement this seam and
/// hand the plugin any [`ConfigExport`] variant, including function exports.
#[async_trait]
pub trait ConfigFileLoader: Send + Sync {
    async fn load(&self, config_path: &Path) -> Result<ConfigExport>;
}

/// Best-effort loader for configs on disk.
///
/// Extracts the fields target inference reads from object-literal exports
/// without executing the file. Function exports cannot be evaluated here and
/// are rejected; only a host-side loader can resolve those.
pub struct StaticConfigLoader {
    function_export: Regex,
    scalar_export: Regex,
    dist_dir: Regex,
}

impl StaticConfigLoader {
    pub fn new() -> Self {
        StaticConfigLoader {
            function_export: Regex::new(
                r"(?:module\.exports\s*=|export\s+default)\s*(?:async\s+)?(?:function\b|\()",
            )
            .unwrap(),
            scalar_export: Regex::new(r#"(?:module\.exports\s*=|export\s+default)\s*["'0-9]"#)
                .unwrap(),
            dist_dir: Regex::new(r#"distDir\s*:\s*["']([^"']+)["']"#).unwrap(),
        }
    }

    fn parse(&self, config_path: &Path, source: &str) -> Result<ConfigExport> {
        if self.function_export.is_match(source) {
            return Err(Error::UnsupportedConfigShape {
                path: config_path.to_path_buf(),
                reason: "function export cannot be evaluated statically".into(),
            });
        }
        if self.scalar_export.is_match(source) {
            return Err(Error::UnsupportedConfigShape {
                path: config_path.to_path_buf(),
                reason: "export is not a plain object".into(),
            });
        }

        let mut settings = NextSettings::default();
        if let Some(captures) = self.dist_dir.captures(source) {
            settings.dist_dir = Some(captures[1].to_string());
        }
        debug!(
            "Parsed {} statically, distDir = {:?}",
            config_path.display(),
            settings.dist_dir
        );
        Ok(ConfigExport::Object(settings))
    }
}

impl Default for StaticConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigFileLoader for StaticConfigLoader {
    async fn load(&self, config_path: &Path) -> Result<ConfigExport> {
        let source = std::fs::read_to_string(config_path)?;
        self.parse(config_path, &source)
    }
}

type ExportFactory = Box<dyn Fn() -> ConfigExport + Send + Sync>;

/// Loader backed by a registry of programmatic exports, for tests and for
/// embedders that evaluate configuration files in-process
#[derive(Default)]
pub struct InMemoryConfigLoader {
    exports: HashMap<PathBuf, ExportFactory>,
}

impl InMemoryConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<F>(&mut self, config_path: impl Into<PathBuf>, factory: F)
    where
        F: Fn() -> ConfigExport + Send + Sync + 'static,
    {
        self.exports.insert(config_path.into(), Box::new(factory));
    }
}

#[async_trait]
impl ConfigFileLoader for InMemoryConfigLoader {
    async fn load(&self, config_path: &Path) -> Result<ConfigExport> {
        match self.exports.get(config_path) {
            Some(factory) => Ok(factory()),
            None => Err(Error::ConfigError(format!(
                "no config registered for {}",
                config_path.display()
            ))),
        }
    }
}
