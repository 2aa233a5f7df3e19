// Route exports
pub mod bookings;
pub mod session;
pub mod talents;

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::config::CatalogSettings;
use crate::core::CatalogSearch;
use crate::models::{ErrorResponse, User};
use crate::services::{CatalogStore, Clock, SessionService};

/// Header carrying the opaque session token
pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub sessions: Arc<SessionService>,
    pub clock: Arc<dyn Clock>,
    pub search: CatalogSearch,
    pub catalog: CatalogSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(talents::configure)
            .configure(bookings::configure)
            .configure(session::configure),
    );
}

/// Resolve the user behind the request's session token, if any
pub(crate) async fn session_user(state: &AppState, req: &HttpRequest) -> Option<User> {
    let token = req
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())?;

    state.sessions.current_user(token).await
}

pub(crate) fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Not logged in".to_string(),
        message: format!("A valid {} header is required", SESSION_TOKEN_HEADER),
        status_code: 401,
    })
}
