//! SessionProvider port - who is signed in.

use async_trait::async_trait;

use crate::domain::foundation::UserId;

/// Supplies the current user's identifier.
///
/// Queried at submission time; the wizard never caches the result.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the signed-in user, or `None` if there is no session.
    async fn current_user_id(&self) -> Option<UserId>;
}
