use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, LoginRequest, SessionResponse, SignupRequest};
use crate::routes::{session_user, unauthorized_response, AppState, SESSION_TOKEN_HEADER};
use crate::services::NewUser;

/// Configure session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login))
        .route("/auth/signup", web::post().to(signup))
        .route("/auth/logout", web::post().to(logout))
        .route("/auth/me", web::get().to(me));
}

/// Login endpoint
///
/// POST /api/v1/auth/login
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .sessions
        .login(&req.email, &req.password, state.clock.today())
        .await
    {
        Ok((token, user)) => {
            tracing::info!("Opened session for {}", user.id);
            HttpResponse::Ok().json(SessionResponse { token, user })
        }
        Err(err) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Login failed".to_string(),
            message: err.to_string(),
            status_code: 401,
        }),
    }
}

/// Signup endpoint
///
/// POST /api/v1/auth/signup
async fn signup(state: web::Data<AppState>, req: web::Json<SignupRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let new_user = NewUser {
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
        email: req.email.clone(),
        phone: req.phone.clone(),
        location: req.location.clone(),
    };

    let (token, user) = state.sessions.signup(new_user, state.clock.today()).await;
    tracing::info!("Signed up user {}", user.id);

    HttpResponse::Created().json(SessionResponse { token, user })
}

/// Logout endpoint
///
/// POST /api/v1/auth/logout
///
/// Idempotent: logging out an already-closed session still succeeds.
async fn logout(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let token = match http_req
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(token) => token,
        None => return unauthorized_response(),
    };

    if state.sessions.logout(token).await.is_err() {
        tracing::debug!("Logout for a token with no active session");
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

/// Current user endpoint
///
/// GET /api/v1/auth/me
async fn me(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    match session_user(&state, &http_req).await {
        Some(user) => HttpResponse::Ok().json(user),
        None => unauthorized_response(),
    }
}
