use loan_core::SubmitError;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// A 4xx answer means the service looked at the application and said no;
/// anything else is treated as the service being unreachable.
impl From<AppError> for SubmitError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Http { status, message } if (400..500).contains(&status) => {
                SubmitError::Rejected(message)
            }
            other => SubmitError::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use loan_core::SubmitError;

    #[test]
    fn client_errors_become_rejections() {
        let err = AppError::Http {
            status: 422,
            message: "studentId already has an open application".to_string(),
        };
        assert_eq!(
            SubmitError::from(err),
            SubmitError::Rejected("studentId already has an open application".to_string())
        );
    }

    #[test]
    fn transport_and_server_errors_mean_unavailable() {
        let timeout = SubmitError::from(AppError::Timeout("Request timed out.".to_string()));
        assert_eq!(
            timeout,
            SubmitError::Unavailable("Timeout: Request timed out.".to_string())
        );

        let server = SubmitError::from(AppError::Http {
            status: 503,
            message: "down".to_string(),
        });
        assert!(matches!(server, SubmitError::Unavailable(_)));
    }
}
