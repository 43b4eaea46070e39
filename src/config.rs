use crate::api::ApiError;

/// Backend connection settings, read once at startup from the build
/// environment and shared with every page through a context provider.
#[derive(Clone, PartialEq, Debug)]
pub struct AppConfig {
    pub base_url: String,
    pub admin_token: Option<String>,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        let base_url = option_env!("BACKEND_URL").unwrap_or("");
        let admin_token = option_env!("ADMIN_TOKEN")
            .map(str::to_string)
            .filter(|token| !token.is_empty());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_token,
        }
    }

    pub fn base_url(&self) -> Result<&str, ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::Config(
                "BACKEND_URL is not configured. Please set it in your environment.".to_string(),
            ));
        }
        Ok(&self.base_url)
    }

    pub fn admin_token(&self) -> Result<&str, ApiError> {
        self.admin_token.as_deref().ok_or_else(|| {
            ApiError::Config(
                "ADMIN_TOKEN is not configured. Please set it in your environment.".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_url_is_a_config_error() {
        let config = AppConfig {
            base_url: String::new(),
            admin_token: Some("secret".to_string()),
        };
        match config.base_url() {
            Err(ApiError::Config(msg)) => assert!(msg.contains("BACKEND_URL")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_admin_token_is_a_config_error() {
        let config = AppConfig {
            base_url: "http://localhost:4000".to_string(),
            admin_token: None,
        };
        match config.admin_token() {
            Err(ApiError::Config(msg)) => assert!(msg.contains("ADMIN_TOKEN")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn configured_values_pass_the_preconditions() {
        let config = AppConfig {
            base_url: "http://localhost:4000".to_string(),
            admin_token: Some("secret".to_string()),
        };
        assert_eq!(config.base_url().unwrap(), "http://localhost:4000");
        assert_eq!(config.admin_token().unwrap(), "secret");
    }
}
