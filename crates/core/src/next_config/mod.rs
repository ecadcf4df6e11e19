//! Loading and evaluation of Next.js configuration files
//!
//! A discovered config file may export a static object, or a function
//! returning one (sync or async). All three shapes are normalized through a
//! single asynchronous [`resolve_config_export`] contract before target
//! inference reads them.

mod loader;
mod settings;

pub use loader::{ConfigFileLoader, InMemoryConfigLoader, StaticConfigLoader};
pub use settings::{ConfigContext, NextSettings};

use futures_util::future::BoxFuture;

use crate::error::Result;

/// Build phase marker passed to function-valued configs, mirroring the
/// framework's `PHASE_PRODUCTION_BUILD` constant
pub const PHASE_PRODUCTION_BUILD: &str = "phase-production-build";

/// Synchronous function-valued config export
pub type ConfigFn = Box<dyn Fn(&str, &ConfigContext) -> Result<NextSettings> + Send + Sync>;

/// Asynchronous function-valued config export
pub type AsyncConfigFn =
    Box<dyn Fn(&str, ConfigContext) -> BoxFuture<'static, Result<NextSettings>> + Send + Sync>;

/// The resolved export of a configuration file
pub enum ConfigExport {
    /// A plain settings object
    Object(NextSettings),
    /// A synchronous function returning settings
    SyncFn(ConfigFn),
    /// A function returning a future of settings
    AsyncFn(AsyncConfigFn),
}

impl std::fmt::Debug for ConfigExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigExport::Object(settings) => f.debug_tuple("Object").field(settings).finish(),
            ConfigExport::SyncFn(_) => f.write_str("SyncFn(..)"),
            ConfigExport::AsyncFn(_) => f.write_str("AsyncFn(..)"),
        }
    }
}

/// Resolve a config export into plain settings.
///
/// Functions are invoked with the production build-phase marker and a context
/// carrying an empty default config. Evaluation failures propagate to the
/// caller; there is no local recovery.
pub async fn resolve_config_export(export: ConfigExport) -> Result<NextSettings> {
    match export {
        ConfigExport::Object(settings) => Ok(settings),
        ConfigExport::SyncFn(config_fn) => {
            config_fn(PHASE_PRODUCTION_BUILD, &ConfigContext::default())
        }
        ConfigExport::AsyncFn(config_fn) => {
            config_fn(PHASE_PRODUCTION_BUILD, ConfigContext::default()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_resolve_static_object() {
        let export = ConfigExport::Object(NextSettings {
            dist_dir: Some("build".into()),
            ..Default::default()
        });
        let settings = resolve_config_export(export).await.unwrap();
        assert_eq!(settings.dist_dir.as_deref(), Some("build"));
    }

    #[tokio::test]
    async fn test_resolve_sync_function_receives_phase() {
        let export = ConfigExport::SyncFn(Box::new(|phase, context| {
            assert_eq!(phase, PHASE_PRODUCTION_BUILD);
            assert_eq!(context.default_config, NextSettings::default());
            Ok(NextSettings {
                dist_dir: Some("dist".into()),
                ..Default::default()
            })
        }));
        let settings = resolve_config_export(export).await.unwrap();
        assert_eq!(settings.dist_dir.as_deref(), Some("dist"));
    }

    #[tokio::test]
    async fn test_resolve_async_function() {
        let export = ConfigExport::AsyncFn(Box::new(|_phase, _context| {
            Box::pin(async {
                Ok(NextSettings {
                    dist_dir: Some("out".into()),
                    ..Default::default()
                })
            })
        }));
        let settings = resolve_config_export(export).await.unwrap();
        assert_eq!(settings.dist_dir.as_deref(), Some("out"));
    }

    #[tokio::test]
    async fn test_resolve_propagates_evaluation_failure() {
        let export = ConfigExport::SyncFn(Box::new(|_phase, _context| {
            Err(Error::ConfigError("boom".into()))
        }));
        let result = resolve_config_export(export).await;
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
