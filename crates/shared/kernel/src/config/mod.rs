use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides, e.g. `RHUB__MIRROR__URL`.
pub const ENV_PREFIX: &str = "RHUB";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rhub.toml";

#[rhub_derive::rhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration: a TOML file overlaid by `RHUB__`-prefixed
/// environment variables, nested with double underscores.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
/// used if present and the type's defaults fill the rest.
///
/// # Errors
/// Returns [`ConfigError`] if an explicit file is missing or unreadable, or
/// if the merged values do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = match path.as_ref() {
        Some(p) => (p.as_ref(), true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    info!(path = %file.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(file).format(FileFormat::Toml).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhub_domain::config::ApiConfig;

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rhub.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8080\n\n[mirror]\nurl = \"http://127.0.0.1:9/exec\"\ntimeout_ms = 2500\n",
        )
        .unwrap();

        let config: ApiConfig = load_config(Some(&path)).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.mirror.url.as_deref(), Some("http://127.0.0.1:9/exec"));
        assert_eq!(config.mirror.timeout_ms, 2500);
        assert_eq!(config.sheet.utc_offset_hours, 9);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config::<ApiConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to build config"));
    }
}
