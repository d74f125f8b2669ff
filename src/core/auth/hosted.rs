//! Client for a hosted GoTrue-compatible auth service (e.g. Supabase Auth)
//!
//! Endpoints used:
//! - POST /auth/v1/token?grant_type=password - sign in
//! - POST /auth/v1/signup - create an account
//! - POST /auth/v1/logout - end the current session
//! - GET /auth/v1/user - current user for the stored access token

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::client::{AuthClient, AuthClientConfig, Credentials, User};
use super::error::{AuthError, error_from_response};
use super::storage::{Session, SessionStore};
use super::transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Hosted client as used by the running application
pub type BrowserAuthClient = HostedAuthClient<FetchTransport>;

/// Sign-up answers with a session when the project auto-confirms accounts,
/// and with the bare user when email confirmation is pending
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(User),
}

pub struct HostedAuthClient<T> {
    config: AuthClientConfig,
    transport: T,
    store: Arc<dyn SessionStore>,
}

impl<T: HttpTransport> HostedAuthClient<T> {
    pub fn new(config: AuthClientConfig, transport: T, store: Arc<dyn SessionStore>) -> Self {
        Self {
            config,
            transport,
            store,
        }
    }

    fn request(&self, method: HttpMethod, path: &str) -> Result<HttpRequest, AuthError> {
        if !self.config.is_configured() {
            return Err(AuthError::NotConfigured);
        }

        Ok(HttpRequest::new(method, self.config.endpoint(path))
            .header("apikey", self.config.anon_key.clone()))
    }

    fn credentials_request(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<HttpRequest, AuthError> {
        let body =
            serde_json::to_string(credentials).map_err(|e| AuthError::Decode(e.to_string()))?;

        Ok(self
            .request(HttpMethod::Post, path)?
            .header("Authorization", format!("Bearer {}", self.config.anon_key))
            .json_body(body))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response.status, &response.body))
        }
    }
}

fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, AuthError> {
    serde_json::from_str(&response.body).map_err(|e| AuthError::Decode(e.to_string()))
}

impl<T: HttpTransport> AuthClient for HostedAuthClient<T> {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let request = self.credentials_request("/token?grant_type=password", credentials)?;
        let response = self.send(request).await?;

        let session: Session = decode(&response)?;
        self.store.save(&session);

        Ok(session.user)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let request = self.credentials_request("/signup", credentials)?;
        let response = self.send(request).await?;

        match decode::<SignUpResponse>(&response)? {
            SignUpResponse::Session(session) => {
                self.store.save(&session);
                Ok(session.user)
            }
            SignUpResponse::User(user) => Ok(user),
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.store.load() else {
            return Ok(());
        };

        let request = self
            .request(HttpMethod::Post, "/logout")?
            .header("Authorization", format!("Bearer {}", session.access_token));

        match self.send(request).await {
            Ok(_) => {}
            // The provider no longer knows the session; dropping it locally is all that is left
            Err(e) if e.is_unauthorized() || e.status() == Some(404) => {}
            Err(e) => return Err(e),
        }

        self.store.clear();
        Ok(())
    }

    async fn get_user(&self) -> Result<Option<User>, AuthError> {
        let Some(session) = self.store.load() else {
            return Ok(None);
        };

        let request = self
            .request(HttpMethod::Get, "/user")?
            .header("Authorization", format!("Bearer {}", session.access_token));

        match self.send(request).await {
            Ok(response) => decode(&response).map(Some),
            Err(e) if e.is_unauthorized() => {
                self.store.clear();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::storage::MemorySessionStore;
    use crate::core::testing::ScriptedTransport;

    const SESSION_BODY: &str = r#"{
        "access_token": "jwt-1",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-1",
        "user": {"id": "user-1", "email": "a@b.com"}
    }"#;

    fn client(
        transport: ScriptedTransport,
    ) -> (HostedAuthClient<ScriptedTransport>, MemorySessionStore) {
        let store = MemorySessionStore::new();
        let client = HostedAuthClient::new(
            AuthClientConfig::new("https://demo.supabase.co", "anon-key"),
            transport,
            Arc::new(store.clone()),
        );
        (client, store)
    }

    fn stored_session(store: &MemorySessionStore) {
        store.save(&serde_json::from_str::<Session>(SESSION_BODY).unwrap());
    }

    #[tokio::test]
    async fn test_sign_in_stores_session() {
        let transport = ScriptedTransport::new().respond(200, SESSION_BODY);
        let (client, store) = client(transport.clone());

        let user = client
            .sign_in_with_password(&Credentials::new("a@b.com", "secret"))
            .await
            .unwrap();

        assert_eq!(user.id, "user-1");
        assert_eq!(store.load().unwrap().access_token, "jwt-1");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            requests[0].url,
            "https://demo.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(requests[0].header_value("apikey"), Some("anon-key"));
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"email":"a@b.com","password":"secret"}"#)
        );
    }

    #[tokio::test]
    async fn test_sign_in_rejected_keeps_store_empty() {
        let transport = ScriptedTransport::new().respond(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        let (client, store) = client(transport);

        let error = client
            .sign_in_with_password(&Credentials::new("a@b.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(error, AuthError::provider(400, "Invalid login credentials"));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_network_failure() {
        let transport = ScriptedTransport::new().fail(AuthError::Network("offline".to_string()));
        let (client, _store) = client(transport);

        let error = client
            .sign_in_with_password(&Credentials::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(error, AuthError::Network(_)));
    }

    #[tokio::test]
    async fn test_sign_in_garbled_success_body() {
        let transport = ScriptedTransport::new().respond(200, "not json");
        let (client, store) = client(transport);

        let error = client
            .sign_in_with_password(&Credentials::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(error, AuthError::Decode(_)));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_client_never_sends() {
        let transport = ScriptedTransport::new();
        let client = HostedAuthClient::new(
            AuthClientConfig::default(),
            transport.clone(),
            Arc::new(MemorySessionStore::new()),
        );

        let error = client
            .sign_up(&Credentials::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert_eq!(error, AuthError::NotConfigured);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_pending_confirmation_stores_nothing() {
        let transport =
            ScriptedTransport::new().respond(200, r#"{"id":"user-2","email":"new@b.com"}"#);
        let (client, store) = client(transport.clone());

        let user = client
            .sign_up(&Credentials::new("new@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(user.id, "user-2");
        assert!(store.load().is_none());
        assert_eq!(
            transport.requests()[0].url,
            "https://demo.supabase.co/auth/v1/signup"
        );
    }

    #[tokio::test]
    async fn test_sign_up_auto_confirmed_stores_session() {
        let transport = ScriptedTransport::new().respond(200, SESSION_BODY);
        let (client, store) = client(transport);

        client
            .sign_up(&Credentials::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(store.load().unwrap().access_token, "jwt-1");
    }

    #[tokio::test]
    async fn test_sign_up_rejected() {
        let transport =
            ScriptedTransport::new().respond(422, r#"{"code":422,"msg":"User already registered"}"#);
        let (client, _store) = client(transport);

        let error = client
            .sign_up(&Credentials::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "User already registered");
    }

    #[tokio::test]
    async fn test_get_user_without_session_skips_network() {
        let transport = ScriptedTransport::new();
        let (client, _store) = client(transport.clone());

        assert_eq!(client.get_user().await, Ok(None));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_user_with_session() {
        let transport = ScriptedTransport::new().respond(200, r#"{"id":"user-1","email":"a@b.com"}"#);
        let (client, store) = client(transport.clone());
        stored_session(&store);

        let user = client.get_user().await.unwrap().unwrap();

        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].header_value("Authorization"), Some("Bearer jwt-1"));
    }

    #[tokio::test]
    async fn test_get_user_expired_token_clears_session() {
        let transport = ScriptedTransport::new().respond(401, r#"{"msg":"JWT expired"}"#);
        let (client, store) = client(transport);
        stored_session(&store);

        assert_eq!(client.get_user().await, Ok(None));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_get_user_server_error_is_reported() {
        let transport = ScriptedTransport::new().respond(500, r#"{"msg":"boom"}"#);
        let (client, store) = client(transport);
        stored_session(&store);

        assert_eq!(client.get_user().await, Err(AuthError::provider(500, "boom")));
        assert!(store.load().is_some());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let transport = ScriptedTransport::new().respond(204, "");
        let (client, store) = client(transport.clone());
        stored_session(&store);

        client.sign_out().await.unwrap();

        assert!(store.load().is_none());
        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://demo.supabase.co/auth/v1/logout");
        assert_eq!(requests[0].header_value("Authorization"), Some("Bearer jwt-1"));
    }

    #[tokio::test]
    async fn test_sign_out_without_session_is_noop() {
        let transport = ScriptedTransport::new();
        let (client, _store) = client(transport.clone());

        client.sign_out().await.unwrap();

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_unknown_session_still_clears() {
        let transport = ScriptedTransport::new().respond(404, r#"{"msg":"Session not found"}"#);
        let (client, store) = client(transport);
        stored_session(&store);

        client.sign_out().await.unwrap();

        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_failure_keeps_session() {
        let transport = ScriptedTransport::new().respond(503, r#"{"message":"Service unavailable"}"#);
        let (client, store) = client(transport);
        stored_session(&store);

        let error = client.sign_out().await.unwrap_err();

        assert_eq!(error.to_string(), "Service unavailable");
        assert!(store.load().is_some());
    }
}
