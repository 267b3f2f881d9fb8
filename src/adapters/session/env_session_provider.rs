use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::SessionProvider;

/// Variable read by default.
pub const DEFAULT_USER_ID_VAR: &str = "PROFILE_WIZARD_USER_ID";

/// Reads the signed-in user from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvSessionProvider {
    var: String,
}

impl EnvSessionProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSessionProvider {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID_VAR)
    }
}

#[async_trait]
impl SessionProvider for EnvSessionProvider {
    async fn current_user_id(&self) -> Option<UserId> {
        std::env::var(&self.var)
            .ok()
            .and_then(|raw| UserId::new(raw.trim()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_variable_each_time() {
        let var = "PROFILE_WIZARD_TEST_SESSION_USER";
        let provider = EnvSessionProvider::new(var);

        std::env::remove_var(var);
        assert!(provider.current_user_id().await.is_none());

        std::env::set_var(var, "  user-42 ");
        assert_eq!(provider.current_user_id().await.unwrap().as_str(), "user-42");

        std::env::set_var(var, "   ");
        assert!(provider.current_user_id().await.is_none());

        std::env::remove_var(var);
    }
}
