//! Admin session cookie handling.
//!
//! The session is a single `admin_session` cookie whose value is the
//! administrator's row id. This module owns the cookie's name, lifetime, and
//! attributes; nothing else in the codebase touches the jar directly.
//!
//! Reading takes the request's cookie jar as an explicit argument so the
//! logic is unit-testable without a live HTTP request. Resolution never
//! fails: an absent or malformed cookie is simply "no session", and the
//! caller decides what that means.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie carrying the admin session.
pub const ADMIN_SESSION_COOKIE: &str = "admin_session";

/// Fixed session lifetime: 24 hours.
const SESSION_MAX_AGE: Duration = Duration::seconds(86_400);

pub struct AdminSession;

impl AdminSession {
    /// Resolves the administrator id from the request's cookies.
    ///
    /// # Returns
    /// - `Some(id)` - A session cookie with a well-formed id was present
    /// - `None` - No cookie, or its value is not a row id
    pub fn admin_id(jar: &CookieJar) -> Option<i32> {
        jar.get(ADMIN_SESSION_COOKIE)?.value().parse().ok()
    }

    /// Builds the session cookie issued on successful login.
    ///
    /// `secure` is set in production where the site is served over TLS.
    pub fn issue(admin_id: i32, secure: bool) -> Cookie<'static> {
        Cookie::build((ADMIN_SESSION_COOKIE, admin_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(secure)
            .max_age(SESSION_MAX_AGE)
            .build()
    }

    /// Builds the removal cookie used by logout.
    ///
    /// The path must match the issued cookie for browsers to drop it.
    pub fn expire() -> Cookie<'static> {
        Cookie::build((ADMIN_SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::ZERO)
            .build()
    }
}
