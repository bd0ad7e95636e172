//! Delivery of a validated loan application. Without an API base URL the
//! portal uses the mock service, which waits and then acknowledges with a
//! generated reference; with one, the application is posted as JSON.

use crate::app_lib::{AppConfig, clock, post_json};
use gloo_timers::future::TimeoutFuture;
use loan_core::{ApplicationSubmitter, LoanApplication, SubmissionReceipt, SubmitError};
use tracing::{debug, info};

const APPLICATIONS_PATH: &str = "/v1/applications";

/// Simulated service with a fixed delay. Never fails.
#[derive(Clone, Copy, Debug)]
pub struct MockSubmitter {
    pub delay_ms: u32,
}

impl ApplicationSubmitter for MockSubmitter {
    async fn submit(
        &self,
        application: &LoanApplication,
    ) -> Result<SubmissionReceipt, SubmitError> {
        debug!(?application, "mock submission");
        TimeoutFuture::new(self.delay_ms).await;
        let reference = format!("APP-{}", to_base36(clock::now_millis()));
        info!(%reference, "mock submission accepted");
        Ok(SubmissionReceipt { reference })
    }
}

/// Posts to `{api_base_url}/v1/applications` and expects a receipt back.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSubmitter;

impl ApplicationSubmitter for HttpSubmitter {
    async fn submit(
        &self,
        application: &LoanApplication,
    ) -> Result<SubmissionReceipt, SubmitError> {
        post_json::<_, SubmissionReceipt>(APPLICATIONS_PATH, application)
            .await
            .map_err(SubmitError::from)
    }
}

/// The collaborator chosen from configuration.
#[derive(Clone, Copy, Debug)]
pub enum Submitter {
    Mock(MockSubmitter),
    Http(HttpSubmitter),
}

impl Submitter {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.uses_remote_api() {
            Self::Http(HttpSubmitter)
        } else {
            Self::Mock(MockSubmitter {
                delay_ms: config.submit_delay_ms,
            })
        }
    }
}

impl ApplicationSubmitter for Submitter {
    async fn submit(
        &self,
        application: &LoanApplication,
    ) -> Result<SubmissionReceipt, SubmitError> {
        match self {
            Self::Mock(mock) => mock.submit(application).await,
            Self::Http(http) => http.submit(application).await,
        }
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, Submitter, to_base36};

    #[test]
    fn base36_references() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn mock_unless_an_api_is_configured() {
        let mut config = AppConfig {
            api_base_url: String::new(),
            submit_delay_ms: 5,
        };
        assert!(matches!(
            Submitter::from_config(&config),
            Submitter::Mock(mock) if mock.delay_ms == 5
        ));

        config.api_base_url = "https://api.payfee.sl".to_string();
        assert!(matches!(Submitter::from_config(&config), Submitter::Http(_)));
    }
}
