use serde::{Deserialize, Serialize};

/// Options accepted from the host tool's plugin registration.
///
/// Every field is optional on the wire; [`PluginOptions::normalize`] fills in
/// the conventional target names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOptions {
    pub build_target_name: Option<String>,
    pub dev_target_name: Option<String>,
    pub start_target_name: Option<String>,
    pub serve_static_target_name: Option<String>,
}

/// Plugin options with every target name filled in. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOptions {
    pub build_target_name: String,
    pub dev_target_name: String,
    pub start_target_name: String,
    pub serve_static_target_name: String,
}

impl PluginOptions {
    pub fn normalize(self) -> NormalizedOptions {
        NormalizedOptions {
            build_target_name: self.build_target_name.unwrap_or_else(|| "build".into()),
            dev_target_name: self.dev_target_name.unwrap_or_else(|| "dev".into()),
            start_target_name: self.start_target_name.unwrap_or_else(|| "start".into()),
            serve_static_target_name: self
                .serve_static_target_name
                .unwrap_or_else(|| "serve-static".into()),
        }
    }
}
