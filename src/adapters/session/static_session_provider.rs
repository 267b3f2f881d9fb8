use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::ports::SessionProvider;

/// Session provider whose user can be swapped at runtime.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    user: Arc<RwLock<Option<UserId>>>,
}

impl StaticSessionProvider {
    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user_id))),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub async fn sign_in(&self, user_id: UserId) {
        *self.user.write().await = Some(user_id);
    }

    pub async fn sign_out(&self) {
        *self.user.write().await = None;
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_user_id(&self) -> Option<UserId> {
        self.user.read().await.clone()
    }
}
