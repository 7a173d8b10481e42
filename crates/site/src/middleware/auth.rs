//! Dashboard access extractor.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::session;

/// Extractor that requires the dashboard login flag.
///
/// If the visitor has not logged in, the request is redirected to the login
/// page at `/admin`.
///
/// # Example
///
/// ```rust,ignore
/// async fn dashboard(_admin: RequireAdmin) -> impl IntoResponse {
///     "welcome back"
/// }
/// ```
pub struct RequireAdmin;

/// Rejection returned when the dashboard is requested without logging in.
pub struct AdminRejection;

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        Redirect::to("/admin").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(AdminRejection)?;

        if session::is_admin(session).await {
            Ok(Self)
        } else {
            tracing::debug!(path = %parts.uri.path(), "Dashboard requested without login");
            Err(AdminRejection)
        }
    }
}
