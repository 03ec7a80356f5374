//! Layered credential resolution for the Naver Open API
//!
//! Resolution order: secrets file (TOML, `[naver]` table) → environment
//! variables → values the user typed into the sidebar for this session.
//! Resolution itself never fails; an incomplete pair is a valid result and
//! it is the pipeline's job to refuse to run with one. Manually entered
//! values live only in the running process and are never written anywhere.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable holding the client ID
pub const CLIENT_ID_ENV: &str = "NAVER_CLIENT_ID";

/// Environment variable holding the client secret
pub const CLIENT_SECRET_ENV: &str = "NAVER_CLIENT_SECRET";

/// A Naver Open API credential pair
///
/// Either field may be empty; [`Credentials::is_complete`] tells whether
/// the pair is usable for requests.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// Secrets must never leak through logs, so Debug redacts both fields.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &redact(&self.client_id))
            .field("client_secret", &redact(&self.client_secret))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(default)]
    naver: NaverSecrets,
}

#[derive(Debug, Default, Deserialize)]
struct NaverSecrets {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both values present and non-empty
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.trim().is_empty()
    }

    /// Resolve credentials from the secrets file, then environment variables
    ///
    /// Missing file, unreadable file, or malformed TOML all degrade to the
    /// next source rather than failing; the result may be partially or
    /// fully empty.
    pub fn resolve(secrets_path: &Path) -> Self {
        let file = Self::from_secrets_file(secrets_path);

        let client_id = file
            .client_id
            .filter(|v| !v.trim().is_empty())
            .or_else(|| std::env::var(CLIENT_ID_ENV).ok())
            .unwrap_or_default();

        let client_secret = file
            .client_secret
            .filter(|v| !v.trim().is_empty())
            .or_else(|| std::env::var(CLIENT_SECRET_ENV).ok())
            .unwrap_or_default();

        let resolved = Self {
            client_id,
            client_secret,
        };

        if !resolved.is_complete() {
            tracing::warn!(
                secrets_path = %secrets_path.display(),
                "credentials incomplete; set them in the secrets file or via \
                 {CLIENT_ID_ENV}/{CLIENT_SECRET_ENV}"
            );
        }

        resolved
    }

    fn from_secrets_file(path: &Path) -> NaverSecrets {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return NaverSecrets::default(),
        };

        match toml::from_str::<SecretsFile>(&content) {
            Ok(file) => file.naver,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed secrets file");
                NaverSecrets::default()
            }
        }
    }

    /// Fill any blank field from session-only values typed in the UI
    ///
    /// Configured sources always win over manual entry.
    #[must_use]
    pub fn or_session(mut self, client_id: &str, client_secret: &str) -> Self {
        if self.client_id.trim().is_empty() {
            self.client_id = client_id.trim().to_string();
        }
        if self.client_secret.trim().is_empty() {
            self.client_secret = client_secret.trim().to_string();
        }
        self
    }
}
