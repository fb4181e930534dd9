use thiserror::Error;

/// Failures the engine can surface. Composition itself is total; only the
/// remote adapters produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error("{provider} API key is missing")]
    MissingCredential { provider: &'static str },
    #[error("remote call failed{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Remote { status: Option<u16>, message: String },
}

impl DesignError {
    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Remote { status, message: message.into() }
    }
}

impl From<reqwest::Error> for DesignError {
    fn from(e: reqwest::Error) -> Self {
        Self::Remote {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_display_includes_status_when_known() {
        let e = DesignError::remote(Some(429), "Rate limit reached");
        assert_eq!(e.to_string(), "remote call failed (429): Rate limit reached");
        let e = DesignError::remote(None, "connection reset");
        assert_eq!(e.to_string(), "remote call failed: connection reset");
    }

    #[test]
    fn missing_credential_names_provider() {
        let e = DesignError::MissingCredential { provider: "OpenAI" };
        assert_eq!(e.to_string(), "OpenAI API key is missing");
    }
}
