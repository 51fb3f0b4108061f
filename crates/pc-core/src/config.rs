use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    /// Which backend to use by default.
    pub default: String,
    /// Gemini-specific configuration.
    pub gemini: GeminiConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            default: "gemini".to_string(),
            gemini: GeminiConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeminiConfig {
    /// Command to run to get the API key (e.g., "pass show gemini-api-key").
    /// The command is run via `sh -c`.
    pub api_key_cmd: Option<String>,
    /// Model to use.
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_cmd: None,
            model: "gemini-1.5-flash".to_string(),
        }
    }
}

impl GeminiConfig {
    /// Resolve the API key from api_key_cmd or the GEMINI_API_KEY env var.
    pub fn resolve_api_key(&self) -> io::Result<String> {
        // Try api_key_cmd first
        if let Some(cmd) = &self.api_key_cmd {
            let output = Command::new("sh").arg("-c").arg(cmd).output()?;

            if output.status.success() {
                let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !key.is_empty() {
                    return Ok(key);
                }
            }
        }

        // Fall back to env var
        std::env::var("GEMINI_API_KEY").map_err(|_| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "GEMINI_API_KEY not set and no api_key_cmd configured",
            )
        })
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Example ideas offered by the /examples command.
    pub examples: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            examples: default_examples(),
        }
    }
}

fn default_examples() -> Vec<String> {
    vec![
        "An AI tool that matches pet owners with ideal pets based on their habits.".to_string(),
        "A subscription service delivering regional snacks from around the world.".to_string(),
        "A marketplace where neighbors rent out rarely used power tools.".to_string(),
    ]
}

impl Config {
    pub fn load_or_default() -> Self {
        Self::load_path(&config_path())
    }

    fn load_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("warning: failed to parse {}: {e}", path.display());
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }
}

fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("pitchcheck").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.backend.default, "gemini");
        assert_eq!(cfg.backend.gemini.api_key_cmd, None);
        assert!(!cfg.ui.examples.is_empty());
    }

    #[test]
    fn gemini_default_model() {
        let cfg = GeminiConfig::default();
        assert_eq!(cfg.model, "gemini-1.5-flash");
    }

    #[test]
    fn parse_backend_config() {
        let toml_str = r#"
[backend]
default = "gemini"

[backend.gemini]
api_key_cmd = "pass show gemini-api-key"
model = "gemini-1.5-pro"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.backend.default, "gemini");
        assert_eq!(
            cfg.backend.gemini.api_key_cmd.as_deref(),
            Some("pass show gemini-api-key")
        );
        assert_eq!(cfg.backend.gemini.model, "gemini-1.5-pro");
    }

    #[test]
    fn parse_ui_examples() {
        let toml_str = r#"
[ui]
examples = ["idea one", "idea two"]
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.ui.examples, vec!["idea one", "idea two"]);
    }

    #[test]
    fn parse_empty_toml() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn parse_toml_without_ui_uses_default_examples() {
        let toml_str = r#"
[backend.gemini]
model = "gemini-1.5-pro"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.ui.examples, default_examples());
    }

    #[test]
    fn resolve_api_key_from_cmd() {
        let cfg = GeminiConfig {
            api_key_cmd: Some("echo test_key_123".to_string()),
            model: "test".to_string(),
        };

        let key = cfg.resolve_api_key().unwrap();
        assert_eq!(key, "test_key_123");
    }

    #[test]
    fn resolve_api_key_cmd_failure_fallback() {
        // If api_key_cmd fails, the env var is tried next. We can't assert
        // success here since it depends on the environment, but it must not
        // panic.
        let cfg = GeminiConfig {
            api_key_cmd: Some("exit 1".to_string()),
            model: "test".to_string(),
        };

        let _ = cfg.resolve_api_key();
    }

    #[test]
    fn load_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[backend.gemini]\nmodel = \"custom-model\"\n").unwrap();

        let cfg = Config::load_path(&path);
        assert_eq!(cfg.backend.gemini.model, "custom-model");
    }

    #[test]
    fn load_path_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_path(&dir.path().join("nope.toml"));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_path_malformed_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml [[[").unwrap();

        let cfg = Config::load_path(&path);
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn config_path_ends_with_expected_name() {
        let path = config_path();
        assert!(path
            .to_string_lossy()
            .ends_with("pitchcheck/config.toml"));
    }
}
