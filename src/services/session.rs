use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::User;
use crate::services::seed;

/// Errors surfaced by the session service
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No active session for the supplied token")]
    UnknownToken,
}

/// Profile fields supplied at signup
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Token-keyed mock session registry.
///
/// Stands in for a real identity provider: the only accepted credential pair
/// is the configured demo login, signup registers users without any
/// verification, and tokens are opaque uuids held in memory. The rest of the
/// service only ever consumes `current_user`, so swapping in a real provider
/// later is contained here.
pub struct SessionService {
    demo_email: String,
    demo_password: String,
    users: RwLock<Vec<User>>,
    sessions: RwLock<HashMap<String, User>>,
}

impl SessionService {
    pub fn new(demo_email: String, demo_password: String) -> Self {
        Self {
            demo_email,
            demo_password,
            users: RwLock::new(seed::seed_users()),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Authenticate the demo credential pair and open a session.
    ///
    /// `today` stamps the demo account's joined date; it is injected by the
    /// caller like every other date in the service.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        today: NaiveDate,
    ) -> Result<(String, User), SessionError> {
        if email != self.demo_email || password != self.demo_password {
            tracing::info!("Rejected login attempt for {}", email);
            return Err(SessionError::InvalidCredentials);
        }

        let user = User {
            id: "demo-user".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            email: self.demo_email.clone(),
            phone: "+250 788 000 000".to_string(),
            location: "Kigali".to_string(),
            joined_date: today,
        };

        Ok(self.open_session(user).await)
    }

    /// Register a new user and open a session for them
    pub async fn signup(&self, new_user: NewUser, today: NaiveDate) -> (String, User) {
        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone: new_user.phone,
            location: new_user.location,
            joined_date: today,
        };

        self.users.write().await.push(user.clone());
        tracing::info!("Registered user {}", user.id);

        self.open_session(user).await
    }

    /// Resolve the user behind a session token
    pub async fn current_user(&self, token: &str) -> Option<User> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Number of registered (seeded plus signed-up) users
    pub async fn registered_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Close a session. Unknown tokens are reported but not an error path
    /// for callers; logout is idempotent at the HTTP layer.
    pub async fn logout(&self, token: &str) -> Result<(), SessionError> {
        match self.sessions.write().await.remove(token) {
            Some(user) => {
                tracing::debug!("Closed session for {}", user.id);
                Ok(())
            }
            None => Err(SessionError::UnknownToken),
        }
    }

    async fn open_session(&self, user: User) -> (String, User) {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), user.clone());
        (token, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_service() -> SessionService {
        SessionService::new("demo@hexahype.com".to_string(), "demo123".to_string())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn test_demo_login_succeeds() {
        let service = create_service();

        let (token, user) = service
            .login("demo@hexahype.com", "demo123", today())
            .await
            .unwrap();

        assert_eq!(user.id, "demo-user");
        assert_eq!(user.joined_date, today());

        let resolved = service.current_user(&token).await.unwrap();
        assert_eq!(resolved.id, "demo-user");
    }

    #[tokio::test]
    async fn test_wrong_credentials_rejected() {
        let service = create_service();

        let err = service
            .login("demo@hexahype.com", "wrong", today())
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));

        let err = service
            .login("someone@else.rw", "demo123", today())
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_signup_opens_session() {
        let service = create_service();

        let new_user = NewUser {
            first_name: "Alice".to_string(),
            last_name: "Mukamana".to_string(),
            email: "alice@example.rw".to_string(),
            phone: "+250 788 111 222".to_string(),
            location: "Northern Province".to_string(),
        };

        let before = service.registered_count().await;
        let (token, user) = service.signup(new_user, today()).await;

        assert!(user.id.starts_with("user-"));
        assert_eq!(user.joined_date, today());
        assert_eq!(service.current_user(&token).await.unwrap().id, user.id);
        assert_eq!(service.registered_count().await, before + 1);
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let service = create_service();

        let (token, _) = service
            .login("demo@hexahype.com", "demo123", today())
            .await
            .unwrap();

        service.logout(&token).await.unwrap();
        assert!(service.current_user(&token).await.is_none());

        let err = service.logout(&token).await.unwrap_err();
        assert!(matches!(err, SessionError::UnknownToken));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_no_user() {
        let service = create_service();
        assert!(service.current_user("not-a-token").await.is_none());
    }
}
