use async_trait::async_trait;
use chrono::Utc;
use rentora_shared::models::events::SignedInEvent;
use rentora_shared::Masked;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: Masked<String>,
    pub password: Masked<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Masked(email.into()),
            password: Masked(password.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub email: Masked<String>,
    pub signed_in_at: i64,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> CoreResult<Session>;
}

/// Accepts any well-formed email/password pair after a fixed delay.
pub struct SimulatedIdentityProvider {
    delay: Duration,
}

impl SimulatedIdentityProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedIdentityProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl IdentityProvider for SimulatedIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> CoreResult<Session> {
        let email = credentials.email.expose().trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::IdentityError("a valid email is required".into()));
        }
        if credentials.password.expose().is_empty() {
            return Err(CoreError::IdentityError("password is required".into()));
        }

        tokio::time::sleep(self.delay).await;

        let session = Session {
            id: Uuid::new_v4(),
            email: Masked(email.to_string()),
            signed_in_at: Utc::now().timestamp(),
        };
        let event = SignedInEvent {
            session_id: session.id,
            email: session.email.clone(),
            signed_in_at: session.signed_in_at,
        };
        tracing::info!(?event, "Signed in");

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_after_delay() {
        let provider = SimulatedIdentityProvider::default();
        let started = tokio::time::Instant::now();

        let session = provider
            .sign_in(&Credentials::new(" priya@example.com ", "secret"))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(session.email.expose(), "priya@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_malformed_credentials() {
        let provider = SimulatedIdentityProvider::default();

        let no_at = provider.sign_in(&Credentials::new("priya", "secret")).await;
        assert!(matches!(no_at, Err(CoreError::IdentityError(_))));

        let no_password = provider
            .sign_in(&Credentials::new("priya@example.com", ""))
            .await;
        assert!(matches!(no_password, Err(CoreError::IdentityError(_))));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new("priya@example.com", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("priya@example.com"));
    }
}
