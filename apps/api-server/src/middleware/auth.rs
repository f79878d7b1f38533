//! Session authentication extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use quill_core::ports::{AuthError, SessionRecord};

use crate::state::AppState;

/// Name of the session cookie set at login and cleared at logout.
pub const SESSION_COOKIE: &str = "sessionid";

/// Authenticated user identity extractor.
///
/// Use this in handlers to require an active session:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub username: String,
    pub is_superuser: bool,
}

impl From<SessionRecord> for Identity {
    fn from(record: SessionRecord) -> Self {
        Self {
            user_id: record.user_id,
            username: record.username,
            is_superuser: record.is_superuser,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::MissingSession | AuthError::InvalidSession => {
                actix_web::http::StatusCode::UNAUTHORIZED
            }
            _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        // MissingSession and InvalidSession get the same body: the caller
        // doesn't learn whether their cookie was absent or stale.
        let message = match &self.0 {
            AuthError::MissingSession | AuthError::InvalidSession => "Authentication required",
            other => {
                tracing::error!("Authentication failure: {}", other);
                "Internal server error"
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(message)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let cookie = req.cookie(SESSION_COOKIE);

        Box::pin(async move {
            let state = match state {
                Some(state) => state,
                None => {
                    tracing::error!("AppState not found in app data");
                    return Err(AuthenticationError(AuthError::SessionBackend(
                        "Server configuration error".to_string(),
                    )));
                }
            };

            let cookie = cookie.ok_or(AuthenticationError(AuthError::MissingSession))?;

            match state.sessions.get(cookie.value()).await {
                Ok(Some(record)) => Ok(Identity::from(record)),
                Ok(None) => Err(AuthenticationError(AuthError::InvalidSession)),
                Err(e) => Err(AuthenticationError(AuthError::SessionBackend(
                    e.to_string(),
                ))),
            }
        })
    }
}
