use thiserror::Error;

/// Ways a single lookup submission can fail. The display text of each
/// variant is exactly what the error panel shows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Please enter an XRP address")]
    EmptyInput,
    #[error("Invalid address or network error")]
    InvalidResponse,
    #[error("{}", transport_text(.0))]
    Network(Option<String>),
}

fn transport_text(detail: &Option<String>) -> &str {
    match detail.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => "Failed to fetch data",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_message_is_fixed() {
        assert_eq!(
            LookupError::EmptyInput.to_string(),
            "Please enter an XRP address"
        );
    }

    #[test]
    fn invalid_response_message_is_fixed() {
        assert_eq!(
            LookupError::InvalidResponse.to_string(),
            "Invalid address or network error"
        );
    }

    #[test]
    fn network_error_uses_transport_text() {
        assert_eq!(
            LookupError::Network(Some("dns error for host".to_string())).to_string(),
            "dns error for host"
        );
    }

    #[test]
    fn network_error_without_text_falls_back() {
        assert_eq!(
            LookupError::Network(None).to_string(),
            "Failed to fetch data"
        );
        assert_eq!(
            LookupError::Network(Some("   ".to_string())).to_string(),
            "Failed to fetch data"
        );
    }
}
