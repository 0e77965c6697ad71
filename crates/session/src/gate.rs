//! Login flag and page gate.
//!
//! The gate is a one-shot boundary check, not a real authentication system:
//! a flag in the session region marks the visitor as logged in, secured pages
//! redirect to the login page when the flag is absent, and logout wipes the
//! whole region.

use crate::storage::{SessionStorage, StorageError};

/// Region key holding the login flag.
pub const LOGIN_FLAG_KEY: &str = "isLoggedIn";

/// Pages a visitor can navigate to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
    Products,
    Contact,
    Cart,
}

impl Page {
    /// Every page except the login page requires a logged-in session. The
    /// cart page in particular is never built for an anonymous visitor.
    pub fn requires_login(self) -> bool {
        !matches!(self, Page::Login)
    }
}

/// Outcome of gating a navigation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the requested page.
    Proceed,
    /// Anonymous visitor on a secured page.
    RedirectToLogin,
    /// Logged-in visitor on the login page.
    RedirectToHome,
}

/// The visitor's session, backed by the session region.
#[derive(Debug)]
pub struct Session<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn is_logged_in(&self) -> bool {
        self.storage.get(LOGIN_FLAG_KEY).as_deref() == Some("true")
    }

    /// Mark the visitor as logged in.
    pub fn log_in(&mut self) -> Result<(), StorageError> {
        self.storage.set(LOGIN_FLAG_KEY, "true")?;
        tracing::info!("session started");
        Ok(())
    }

    /// End the session: the entire region is wiped, so the login flag and
    /// any persisted cart are gone together. Callers that hold a live
    /// `CartStore` must also clear it, since its in-memory state is
    /// authoritative.
    pub fn log_out(&mut self) {
        self.storage.clear();
        tracing::info!("session ended");
    }
}

/// Gate a navigation attempt against the current session.
pub fn gate<S: SessionStorage>(session: &Session<S>, page: Page) -> GateOutcome {
    let logged_in = session.is_logged_in();
    if page.requires_login() && !logged_in {
        return GateOutcome::RedirectToLogin;
    }
    if page == Page::Login && logged_in {
        return GateOutcome::RedirectToHome;
    }
    GateOutcome::Proceed
}
