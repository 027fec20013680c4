//! crux-llvm tool configuration.
//!
//! Holds the user-configured tool locations and the search path, and knows
//! how to read them out of a `settings.json` document.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Settings namespace the host stores our configuration under.
pub const SETTINGS_NAMESPACE: &str = "crux-llvm";

/// Settings key holding the search path used by PATH-override checks.
pub const PATH_KEY: &str = "path";

/// A configured tool whose executable location lives in its own setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKey {
    Clang,
    CruxLlvm,
    LlvmLink,
}

impl ToolKey {
    /// Every tool key, in settings order.
    pub const ALL: [ToolKey; 3] = [ToolKey::Clang, ToolKey::CruxLlvm, ToolKey::LlvmLink];

    /// The setting name, without the namespace prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolKey::Clang => "clang",
            ToolKey::CruxLlvm => "crux-llvm",
            ToolKey::LlvmLink => "llvm-link",
        }
    }

    /// Fully qualified setting name, e.g. `crux-llvm.clang`.
    pub fn setting_name(self) -> String {
        format!("{}.{}", SETTINGS_NAMESPACE, self.as_str())
    }
}

impl fmt::Display for ToolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ToolKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .with_context(|| format!("unknown tool key: {}", s))
    }
}

/// The crux-llvm fragment of the user's settings.
///
/// Tool fields default to the bare tool name, so an unconfigured tool is
/// looked up the way a shell would look it up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    pub clang: String,
    pub crux_llvm: String,
    pub llvm_link: String,
    pub path: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            clang: ToolKey::Clang.as_str().to_string(),
            crux_llvm: ToolKey::CruxLlvm.as_str().to_string(),
            llvm_link: ToolKey::LlvmLink.as_str().to_string(),
            path: String::new(),
        }
    }
}

impl Configuration {
    /// The configured executable for `key`.
    pub fn tool(&self, key: ToolKey) -> &str {
        match key {
            ToolKey::Clang => &self.clang,
            ToolKey::CruxLlvm => &self.crux_llvm,
            ToolKey::LlvmLink => &self.llvm_link,
        }
    }

    /// The configured search path.
    pub fn search_path(&self) -> &str {
        &self.path
    }

    pub fn with_tool(mut self, key: ToolKey, value: impl Into<String>) -> Self {
        let value = value.into();
        match key {
            ToolKey::Clang => self.clang = value,
            ToolKey::CruxLlvm => self.crux_llvm = value,
            ToolKey::LlvmLink => self.llvm_link = value,
        }
        self
    }

    pub fn with_path(mut self, value: impl Into<String>) -> Self {
        self.path = value.into();
        self
    }

    /// Build a configuration from a `settings.json` document.
    ///
    /// Accepts both the flat dotted form VS Code writes
    /// (`"crux-llvm.clang": "..."`) and a nested `"crux-llvm": { ... }`
    /// object. Flat keys win when both are present. Keys outside the
    /// namespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object or a namespaced
    /// value has the wrong type.
    pub fn from_settings_json(text: &str) -> Result<Self> {
        let settings: Map<String, Value> =
            serde_json::from_str(text).context("settings must be a JSON object")?;

        let mut fragment = match settings.get(SETTINGS_NAMESPACE) {
            Some(Value::Object(nested)) => nested.clone(),
            _ => Map::new(),
        };

        let prefix = format!("{}.", SETTINGS_NAMESPACE);
        for (key, value) in &settings {
            if let Some(field) = key.strip_prefix(&prefix) {
                fragment.insert(field.to_string(), value.clone());
            }
        }

        serde_json::from_value(Value::Object(fragment))
            .with_context(|| format!("invalid {} settings", SETTINGS_NAMESPACE))
    }

    /// Read and parse a `settings.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file: {}", path.display()))?;
        Self::from_settings_json(&text)
            .with_context(|| format!("failed to parse settings file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp dir")
    }

    #[test]
    fn test_default_uses_bare_names() {
        let config = Configuration::default();
        for key in ToolKey::ALL {
            assert_eq!(config.tool(key), key.as_str());
        }
        assert_eq!(config.search_path(), "");
    }

    #[test]
    fn test_with_tool_only_touches_one_field() {
        let config = Configuration::default().with_tool(ToolKey::LlvmLink, "/opt/llvm/bin/llvm-link");
        assert_eq!(config.tool(ToolKey::LlvmLink), "/opt/llvm/bin/llvm-link");
        assert_eq!(config.tool(ToolKey::Clang), "clang");
        assert_eq!(config.tool(ToolKey::CruxLlvm), "crux-llvm");
    }

    #[test]
    fn test_setting_name() {
        assert_eq!(ToolKey::Clang.setting_name(), "crux-llvm.clang");
        assert_eq!(ToolKey::CruxLlvm.setting_name(), "crux-llvm.crux-llvm");
    }

    #[test]
    fn test_tool_key_round_trips_through_str() {
        for key in ToolKey::ALL {
            assert_eq!(key.as_str().parse::<ToolKey>().unwrap(), key);
        }
        assert!("path".parse::<ToolKey>().is_err());
    }

    #[test]
    fn test_flat_settings() {
        let text = r#"{
            "editor.tabSize": 4,
            "crux-llvm.clang": "/usr/local/bin/clang",
            "crux-llvm.path": "/usr/local/bin:/usr/bin"
        }"#;
        let config = Configuration::from_settings_json(text).unwrap();
        assert_eq!(config.clang, "/usr/local/bin/clang");
        assert_eq!(config.crux_llvm, "crux-llvm");
        assert_eq!(config.path, "/usr/local/bin:/usr/bin");
    }

    #[test]
    fn test_nested_settings() {
        let text = r#"{ "crux-llvm": { "llvm-link": "/opt/llvm-link", "path": "/opt" } }"#;
        let config = Configuration::from_settings_json(text).unwrap();
        assert_eq!(config.llvm_link, "/opt/llvm-link");
        assert_eq!(config.path, "/opt");
    }

    #[test]
    fn test_flat_key_overrides_nested() {
        let text = r#"{
            "crux-llvm": { "clang": "/nested/clang" },
            "crux-llvm.clang": "/flat/clang"
        }"#;
        let config = Configuration::from_settings_json(text).unwrap();
        assert_eq!(config.clang, "/flat/clang");
    }

    #[test]
    fn test_unknown_namespaced_keys_ignored() {
        let text = r#"{ "crux-llvm.debug": true }"#;
        assert_eq!(
            Configuration::from_settings_json(text).unwrap(),
            Configuration::default()
        );
    }

    #[test]
    fn test_wrong_value_type_is_error() {
        let text = r#"{ "crux-llvm.clang": 42 }"#;
        let err = Configuration::from_settings_json(text).unwrap_err();
        assert!(err.to_string().contains("invalid crux-llvm settings"));
    }

    #[test]
    fn test_not_an_object_is_error() {
        assert!(Configuration::from_settings_json("[]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = create_temp_dir();
        let settings = dir.path().join("settings.json");
        fs::write(&settings, r#"{ "crux-llvm.crux-llvm": "/bin/crux-llvm" }"#).unwrap();

        let config = Configuration::load(&settings).unwrap();
        assert_eq!(config.tool(ToolKey::CruxLlvm), "/bin/crux-llvm");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = create_temp_dir();
        let err = Configuration::load(&dir.path().join("settings.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read settings file"));
    }
}
