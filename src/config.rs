use crate::errors::ConfigError;

/// Connection settings for the PlayFab Client API, which acts as the remote
/// validation authority.
///
/// The session ticket is obtained by the (external) login flow and is sent
/// with every validation call.
#[derive(Debug, Clone)]
pub struct PlayFabConfig {
    pub title_id: String,
    pub session_ticket: String,
    /// Overrides the default `https://{title_id}.playfabapi.com` endpoint.
    pub api_base_url: Option<String>,
}

impl PlayFabConfig {
    pub fn new(
        title_id: impl Into<String>,
        session_ticket: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            title_id: title_id.into(),
            session_ticket: session_ticket.into(),
            api_base_url: None,
        };
        if config.title_id.trim().is_empty() {
            return Err(ConfigError::MissingValue("title id"));
        }
        if config.session_ticket.trim().is_empty() {
            return Err(ConfigError::MissingValue("session ticket"));
        }
        // The title id becomes a host name label.
        if !config.title_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidValue {
                name: "title id",
                reason: format!("'{}' is not a title id", config.title_id),
            });
        }
        Ok(config)
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = Some(api_base_url.into());
        self
    }

    pub fn base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.playfabapi.com", self.title_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[test]
    fn defaults_to_title_endpoint() {
        let config = PlayFabConfig::new("A1B2C", "ticket").unwrap();
        assert_eq!(config.session_ticket, "ticket");
        assert_eq!(config.base_url(), "https://A1B2C.playfabapi.com");
    }

    #[test]
    fn endpoint_override_drops_trailing_slash() {
        let config = PlayFabConfig::new("A1B2C", "ticket")
            .unwrap()
            .with_api_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[rstest]
    #[case("", "ticket", ConfigError::MissingValue("title id"))]
    #[case("A1B2C", "  ", ConfigError::MissingValue("session ticket"))]
    fn blank_values_are_reported_by_name(
        #[case] title_id: &str,
        #[case] session_ticket: &str,
        #[case] expected: ConfigError,
    ) {
        assert_eq!(
            PlayFabConfig::new(title_id, session_ticket).unwrap_err(),
            expected
        );
    }

    #[rstest]
    #[case("https://example.com")]
    #[case("a1b2c.playfabapi.com")]
    #[case("A1 B2")]
    fn rejects_title_id_that_is_not_a_host_label(#[case] title_id: &str) {
        let err = PlayFabConfig::new(title_id, "ticket").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "title id", .. }));
    }
}
