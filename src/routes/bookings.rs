use actix_web::{web, HttpRequest, HttpResponse, Responder};
use chrono::NaiveTime;
use validator::Validate;

use crate::core::classify_bookings;
use crate::models::{
    BookingRecord, BookingStatus, CreateBookingRequest, ErrorResponse, ScheduleResponse,
};
use crate::routes::{session_user, unauthorized_response, AppState};
use crate::services::StoreError;

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings", web::post().to(create_booking))
        .route("/bookings/schedule", web::get().to(schedule))
        .route("/bookings/{id}/cancel", web::post().to(cancel_booking));
}

/// Event start times come in as HH:MM from the booking form; accept a
/// trailing seconds component as well.
fn parse_event_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Create a booking request endpoint
///
/// POST /api/v1/bookings
///
/// Request body:
/// ```json
/// {
///   "talentId": "string",
///   "eventDate": "2024-06-01",
///   "eventTime": "18:00",
///   "duration": 3,
///   "eventType": "Wedding",
///   "location": "string",
///   "description": "string"
/// }
/// ```
async fn create_booking(
    state: web::Data<AppState>,
    req: web::Json<CreateBookingRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_booking request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user = match session_user(&state, &http_req).await {
        Some(user) => user,
        None => return unauthorized_response(),
    };

    let talent = match state.store.talent(&req.talent_id) {
        Some(talent) => talent,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Talent not found".to_string(),
                message: format!("No talent with id {}", req.talent_id),
                status_code: 404,
            });
        }
    };

    let event_time = match parse_event_time(&req.event_time) {
        Some(time) => time,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid event time".to_string(),
                message: "Event time must be formatted as HH:MM".to_string(),
                status_code: 400,
            });
        }
    };

    let total_amount = talent.hourly_rate as u64 * req.duration as u64;

    let booking = BookingRecord {
        id: uuid::Uuid::new_v4().to_string(),
        client_id: user.id.clone(),
        talent_id: talent.id.clone(),
        event_date: req.event_date,
        event_time,
        duration_hours: req.duration,
        event_type: req.event_type.clone(),
        location: req.location.clone(),
        description: req.description.clone(),
        status: BookingStatus::Pending,
        total_amount,
        created_at: state.clock.today(),
    };

    tracing::info!(
        "Booking request {} from client {} for talent {} ({} RWF)",
        booking.id,
        user.id,
        talent.id,
        total_amount
    );

    state.store.insert_booking(booking.clone()).await;

    HttpResponse::Created().json(booking)
}

/// Cancel a pending booking endpoint
///
/// POST /api/v1/bookings/{id}/cancel
async fn cancel_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
    http_req: HttpRequest,
) -> impl Responder {
    let user = match session_user(&state, &http_req).await {
        Some(user) => user,
        None => return unauthorized_response(),
    };

    let booking_id = path.into_inner();

    match state.store.cancel_booking(&booking_id, &user.id).await {
        Ok(booking) => {
            tracing::info!("Client {} cancelled booking {}", user.id, booking.id);
            HttpResponse::Ok().json(booking)
        }
        Err(err @ StoreError::BookingNotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Booking not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        Err(err @ StoreError::NotBookingOwner(_)) => HttpResponse::Forbidden().json(ErrorResponse {
            error: "Not booking owner".to_string(),
            message: err.to_string(),
            status_code: 403,
        }),
        Err(err @ StoreError::NotCancellable { .. }) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Booking not cancellable".to_string(),
            message: err.to_string(),
            status_code: 409,
        }),
    }
}

/// Classified schedule endpoint
///
/// GET /api/v1/bookings/schedule
///
/// Buckets the caller's bookings into upcoming / pending / past relative to
/// today and joins each with its talent's display name.
async fn schedule(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let user = match session_user(&state, &http_req).await {
        Some(user) => user,
        None => return unauthorized_response(),
    };

    let bookings = state.store.all_bookings().await;
    let buckets = classify_bookings(&bookings, &user.id, state.clock.today());

    tracing::debug!(
        "Schedule for {}: {} upcoming, {} pending, {} past",
        user.id,
        buckets.upcoming.len(),
        buckets.pending.len(),
        buckets.past.len()
    );

    let talents = state.store.all_talents();
    HttpResponse::Ok().json(ScheduleResponse::from_buckets(buckets, &talents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_time_formats() {
        assert_eq!(
            parse_event_time("18:00"),
            NaiveTime::from_hms_opt(18, 0, 0)
        );
        assert_eq!(
            parse_event_time("19:30:00"),
            NaiveTime::from_hms_opt(19, 30, 0)
        );
        assert_eq!(parse_event_time("7pm"), None);
        assert_eq!(parse_event_time(""), None);
    }
}
