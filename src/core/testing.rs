//! Test doubles for the auth client, its transport, and the router

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::auth::{
    AuthClient, AuthError, Credentials, HttpRequest, HttpResponse, HttpTransport, User,
};
use super::navigation::Navigator;
use super::routes::AppRoute;

/// Transport that replays canned responses in order and records every request
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, AuthError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: AuthError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("ScriptedTransport ran out of replies")
    }
}

/// A call made against [`ScriptedAuthClient`]
#[derive(Debug, Clone, PartialEq)]
pub enum AuthCall {
    SignIn(Credentials),
    SignUp(Credentials),
    SignOut,
    GetUser,
}

/// Auth client with per-operation canned results
///
/// Unscripted operations succeed; sign-in and sign-up then return
/// [`ScriptedAuthClient::user`] and `get_user` reports no session.
#[derive(Clone, Default)]
pub struct ScriptedAuthClient {
    sign_in: Rc<RefCell<VecDeque<Result<User, AuthError>>>>,
    sign_up: Rc<RefCell<VecDeque<Result<User, AuthError>>>>,
    sign_out: Rc<RefCell<VecDeque<Result<(), AuthError>>>>,
    get_user: Rc<RefCell<VecDeque<Result<Option<User>, AuthError>>>>,
    calls: Rc<RefCell<Vec<AuthCall>>>,
}

impl ScriptedAuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user() -> User {
        User {
            id: "user-1".to_string(),
            email: Some("a@b.com".to_string()),
        }
    }

    pub fn with_sign_in(self, result: Result<User, AuthError>) -> Self {
        self.sign_in.borrow_mut().push_back(result);
        self
    }

    pub fn with_sign_up(self, result: Result<User, AuthError>) -> Self {
        self.sign_up.borrow_mut().push_back(result);
        self
    }

    pub fn with_sign_out(self, result: Result<(), AuthError>) -> Self {
        self.sign_out.borrow_mut().push_back(result);
        self
    }

    pub fn with_user(self, result: Result<Option<User>, AuthError>) -> Self {
        self.get_user.borrow_mut().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&AuthCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }
}

impl AuthClient for ScriptedAuthClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.calls
            .borrow_mut()
            .push(AuthCall::SignIn(credentials.clone()));
        let next = self.sign_in.borrow_mut().pop_front();
        next.unwrap_or_else(|| Ok(Self::user()))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.calls
            .borrow_mut()
            .push(AuthCall::SignUp(credentials.clone()));
        let next = self.sign_up.borrow_mut().pop_front();
        next.unwrap_or_else(|| Ok(Self::user()))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.calls.borrow_mut().push(AuthCall::SignOut);
        let next = self.sign_out.borrow_mut().pop_front();
        next.unwrap_or(Ok(()))
    }

    async fn get_user(&self) -> Result<Option<User>, AuthError> {
        self.calls.borrow_mut().push(AuthCall::GetUser);
        let next = self.get_user.borrow_mut().pop_front();
        next.unwrap_or(Ok(None))
    }
}

/// Navigator that remembers where it was asked to go
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<AppRoute>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<AppRoute> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: AppRoute) {
        self.visited.borrow_mut().push(route);
    }
}
