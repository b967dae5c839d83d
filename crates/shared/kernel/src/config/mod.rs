use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Prefix of environment overrides (`ARK__VAULT__MASTER_SECRET` maps to `vault.master_secret`).
pub const ENV_PREFIX: &str = "ARK";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[ark_derive::ark_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Defaults**: Whatever `T`'s `serde` defaults provide.
/// 2. **File**: When `path` is given, the file must exist. Its format (TOML, JSON, YAML, ...)
///    is picked from the extension.
/// 3. **Environment Overrides**: Variables prefixed with `ARK__`. Nested structures are
///    separated by double underscores (e.g., `ARK__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if the merged
/// values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use ark_kernel::config::load_config;
/// use ark_kernel::domain::config::ArkConfig;
///
/// let cfg: ArkConfig = load_config(None).unwrap_or_default();
/// assert!(!cfg.logging.level.is_empty());
/// ```
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layers(path, Environment::with_prefix(ENV_PREFIX))
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process
/// environment. Keys keep their `ARK__` prefix.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env<T, I>(path: Option<&Path>, vars: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    let source: config::Map<String, String> = vars.into_iter().collect();
    load_layers(path, Environment::with_prefix(ENV_PREFIX).source(Some(source)))
}

fn load_layers<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        debug!(path = %path.display(), "Loading config file");
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(env.prefix_separator(ENV_SEPARATOR).separator(ENV_SEPARATOR));

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
