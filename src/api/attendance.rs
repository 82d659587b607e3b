use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::config::Config;
use crate::error::ValidationError;
use crate::model::attendance::{AttendanceOutcome, AttendanceRequest, evaluate};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckinResponse {
    pub success: bool,
    #[schema(example = "تم تسجيل الحضور بنجاح ✅")]
    pub message: String,
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub timestamp: String,
    #[schema(example = 30.5606667)]
    pub latitude: f64,
    #[schema(example = 31.0100556)]
    pub longitude: f64,
    /// Distance to the company location in meters, 2 decimal places.
    #[schema(example = 0.0)]
    pub distance: f64,
    #[schema(example = 12.5)]
    pub accuracy: Option<f64>,
    #[serde(rename = "type")]
    #[schema(example = "check_in")]
    pub event_type: String,
    pub company_latitude: f64,
    pub company_longitude: f64,
    #[schema(example = 50.0)]
    pub geofence_radius: f64,
}

impl CheckinResponse {
    fn new(outcome: AttendanceOutcome, message: String) -> Self {
        Self {
            success: outcome.within_geofence,
            message,
            timestamp: outcome.timestamp,
            latitude: outcome.location.latitude,
            longitude: outcome.location.longitude,
            distance: outcome.distance_meters,
            accuracy: outcome.accuracy,
            event_type: outcome.event_type,
            company_latitude: outcome.site.location.latitude,
            company_longitude: outcome.site.location.longitude,
            geofence_radius: outcome.site.radius_meters,
        }
    }
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/checkin",
    request_body(content = Object, description = "Attendance report from the device", example = json!({
        "latitude": 30.5606667,
        "longitude": 31.0100556,
        "accuracy": 12.5,
        "type": "check_in",
        "timestamp": "2024-01-01T00:00:00.000Z"
    })),
    responses(
        (status = 200, description = "Device is inside the geofence, attendance recorded", body = CheckinResponse),
        (status = 403, description = "Device is outside the geofence", body = CheckinResponse),
        (status = 400, description = "Latitude or longitude missing or not numeric", body = Object, example = json!({
            "error": "latitude and longitude must be numbers"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    config: web::Data<Config>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ValidationError> {
    let request = AttendanceRequest::decode(&body).map_err(|e| {
        warn!(error = %e, "Rejected check-in payload");
        e
    })?;

    let outcome = evaluate(&request, &config.site);
    info!(
        distance_m = outcome.distance_meters,
        within = outcome.within_geofence,
        event = %outcome.event_type,
        "Attendance evaluated"
    );

    let within = outcome.within_geofence;
    let message = if within {
        config.accepted_message.clone()
    } else {
        config.rejected_message.clone()
    };

    let response = CheckinResponse::new(outcome, message);
    if within {
        Ok(HttpResponse::Ok().json(response))
    } else {
        Ok(HttpResponse::Forbidden().json(response))
    }
}
