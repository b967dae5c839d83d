use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Top-level configuration of the `ark` tooling.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArkConfig {
    pub vault: VaultConfig,
    pub logging: LoggingConfig,
}

/// Key material settings.
#[derive(Default, Clone, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Hex-encoded master secret. Usually supplied via `ARK__VAULT__MASTER_SECRET`.
    /// Wiped when the configuration is dropped.
    pub master_secret: Option<Zeroizing<String>>,
}

impl VaultConfig {
    #[must_use]
    pub fn with_master_secret(encoded: impl Into<String>) -> Self {
        Self { master_secret: Some(Zeroizing::new(encoded.into())) }
    }

    /// The configured hex secret, if any.
    #[must_use]
    pub fn master_secret_hex(&self) -> Option<&str> {
        self.master_secret.as_deref().map(String::as_str)
    }
}

impl fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultConfig")
            .field("master_secret", &self.master_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Render console events as JSON instead of compact text.
    pub json: bool,
    /// Explicit filter directives, overriding `RUST_LOG`.
    pub directives: Option<String>,
    /// Also write rolling JSON log files into this directory.
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false, directives: None, directory: None }
    }
}
