use super::MirrorSink;
use super::error::{MirrorError, MirrorErrorExt};
use reqwest::{Client, Url};
use rhub_domain::config::MirrorConfig;
use rhub_domain::partner::PartnerRecord;
use std::time::Duration;
use tracing::debug;

/// Marker left in sample configs in place of a real script id.
const PLACEHOLDER_MARKER: &str = "YOUR_SCRIPT_ID";

/// Posts records as JSON to the sheet backend.
///
/// By default any answer counts as delivered, matching a browser
/// fire-and-forget post whose response is opaque. `verify_status` turns
/// non-2xx answers into [`MirrorError::Rejected`].
#[derive(Debug, Clone)]
pub struct HttpMirror {
    client: Client,
    url: Option<Url>,
    verify_status: bool,
}

impl HttpMirror {
    /// # Errors
    /// [`MirrorError::InvalidConfig`] for an unparsable URL,
    /// [`MirrorError::Transport`] if the HTTP client cannot be built.
    pub fn new(url: Option<&str>, timeout: Duration, verify_status: bool) -> Result<Self, MirrorError> {
        let url = match url.map(str::trim) {
            None | Some("") => None,
            Some(raw) if raw.contains(PLACEHOLDER_MARKER) => None,
            Some(raw) => Some(Url::parse(raw).map_err(|e| MirrorError::InvalidConfig {
                message: e.to_string().into(),
                context: Some(format!("mirror.url = {raw}").into()),
            })?),
        };

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;

        Ok(Self { client, url, verify_status })
    }

    /// # Errors
    /// See [`HttpMirror::new`].
    pub fn from_config(config: &MirrorConfig) -> Result<Self, MirrorError> {
        Self::new(
            config.url.as_deref(),
            Duration::from_millis(config.timeout_ms),
            config.verify_status,
        )
    }

    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }
}

impl MirrorSink for HttpMirror {
    async fn mirror(&self, record: &PartnerRecord) -> Result<(), MirrorError> {
        let Some(url) = &self.url else {
            return Err(MirrorError::NotConfigured {
                message: "mirror.url is not set".into(),
                context: None,
            });
        };

        let response = match self.client.post(url.clone()).json(record).send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                return Err(MirrorError::Timeout { message: err.to_string().into(), context: None });
            },
            Err(err) => {
                return Err(MirrorError::Transport {
                    source: err,
                    context: Some(format!("POST {url}").into()),
                });
            },
        };

        let status = response.status();
        if self.verify_status && !status.is_success() {
            return Err(MirrorError::Rejected {
                message: format!("sheet answered {status}").into(),
                context: Some(record.code.clone().into()),
            });
        }

        debug!(code = %record.code, %status, "Record mirrored");
        Ok(())
    }
}
