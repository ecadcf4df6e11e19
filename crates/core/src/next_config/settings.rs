use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plain Next.js settings, after any function export has been evaluated.
///
/// Target inference only reads `distDir`; everything else is carried through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NextSettings {
    pub fn with_dist_dir(dir: &str) -> Self {
        NextSettings {
            dist_dir: Some(dir.to_string()),
            ..Default::default()
        }
    }
}

/// Context handed to function-valued configs: an empty default config, as the
/// framework does during a production build
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigContext {
    pub default_config: NextSettings,
}
