use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::error::ValidationError;
use crate::model::geo::GeoPoint;
use crate::model::site::ReferenceSite;

pub const DEFAULT_EVENT_TYPE: &str = "check_in";

/// A single attendance report, decoded from the wire payload.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRequest {
    pub location: GeoPoint,
    pub accuracy: Option<f64>,
    pub event_type: String,
    /// Timestamp supplied by the device, taken verbatim when present.
    pub client_timestamp: Option<String>,
}

impl AttendanceRequest {
    /// Decode a raw JSON body into a typed request.
    ///
    /// `latitude` and `longitude` must be JSON numbers; everything else is
    /// optional and falls back to a default. This is the only validation
    /// performed on the payload.
    pub fn decode(body: &Value) -> Result<Self, ValidationError> {
        let latitude = body.get("latitude").and_then(Value::as_f64);
        let longitude = body.get("longitude").and_then(Value::as_f64);

        let location = match (latitude, longitude) {
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
            _ => return Err(ValidationError::CoordinatesNotNumbers),
        };

        let accuracy = body.get("accuracy").and_then(Value::as_f64);

        let event_type = body
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_EVENT_TYPE)
            .to_string();

        let client_timestamp = body
            .get("timestamp")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(Self {
            location,
            accuracy,
            event_type,
            client_timestamp,
        })
    }
}

/// The result of evaluating one attendance report against the site.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceOutcome {
    pub timestamp: String,
    pub location: GeoPoint,
    /// Distance to the site, rounded to 2 decimal places for reporting.
    pub distance_meters: f64,
    pub accuracy: Option<f64>,
    pub event_type: String,
    pub site: ReferenceSite,
    pub within_geofence: bool,
}

/// Classify a request as inside or outside the site's geofence.
///
/// The inside/outside decision uses the unrounded distance; a point exactly
/// at the radius counts as inside. The client timestamp wins when present,
/// otherwise the server's current UTC time is stamped.
pub fn evaluate(request: &AttendanceRequest, site: &ReferenceSite) -> AttendanceOutcome {
    let distance = request.location.distance_meters(&site.location);
    let within_geofence = distance <= site.radius_meters;

    let timestamp = request
        .client_timestamp
        .clone()
        .unwrap_or_else(server_timestamp);

    AttendanceOutcome {
        timestamp,
        location: request.location,
        distance_meters: round_two_places(distance),
        accuracy: request.accuracy,
        event_type: request.event_type.clone(),
        site: *site,
        within_geofence,
    }
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-01-01T00:00:00.000Z`.
fn server_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn round_two_places(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn decode_rejects_string_latitude() {
        let body = json!({ "latitude": "30.5", "longitude": 31.0100556 });
        assert_eq!(
            AttendanceRequest::decode(&body),
            Err(ValidationError::CoordinatesNotNumbers)
        );
    }

    #[test]
    fn decode_rejects_missing_longitude() {
        let body = json!({ "latitude": 30.5606667 });
        assert_eq!(
            AttendanceRequest::decode(&body),
            Err(ValidationError::CoordinatesNotNumbers)
        );
    }

    #[test]
    fn decode_fills_defaults() {
        let body = json!({ "latitude": 30.5606667, "longitude": 31.0100556 });
        let request = AttendanceRequest::decode(&body).unwrap();
        assert_eq!(request.event_type, "check_in");
        assert_eq!(request.accuracy, None);
        assert_eq!(request.client_timestamp, None);
    }

    #[test]
    fn decode_accepts_integer_coordinates() {
        let body = json!({ "latitude": 30, "longitude": 31 });
        let request = AttendanceRequest::decode(&body).unwrap();
        assert_eq!(request.location, GeoPoint::new(30.0, 31.0));
    }

    #[test]
    fn decode_treats_empty_timestamp_as_absent() {
        let body = json!({ "latitude": 30.0, "longitude": 31.0, "timestamp": "" });
        let request = AttendanceRequest::decode(&body).unwrap();
        assert_eq!(request.client_timestamp, None);
    }

    #[test]
    fn decode_keeps_optional_fields() {
        let body = json!({
            "latitude": 30.0,
            "longitude": 31.0,
            "accuracy": 12.5,
            "type": "check_out",
            "timestamp": "2024-01-01T00:00:00.000Z"
        });
        let request = AttendanceRequest::decode(&body).unwrap();
        assert_eq!(request.accuracy, Some(12.5));
        assert_eq!(request.event_type, "check_out");
        assert_eq!(
            request.client_timestamp.as_deref(),
            Some("2024-01-01T00:00:00.000Z")
        );
    }

    fn request_at(latitude: f64, longitude: f64) -> AttendanceRequest {
        AttendanceRequest {
            location: GeoPoint::new(latitude, longitude),
            accuracy: None,
            event_type: DEFAULT_EVENT_TYPE.to_string(),
            client_timestamp: None,
        }
    }

    #[test]
    fn evaluate_classifies_site_center_as_inside() {
        let site = ReferenceSite::default();
        let outcome = evaluate(
            &request_at(site.location.latitude, site.location.longitude),
            &site,
        );
        assert!(outcome.within_geofence);
        assert_eq!(outcome.distance_meters, 0.0);
    }

    #[test]
    fn evaluate_classifies_distant_point_as_outside() {
        let site = ReferenceSite::default();
        let outcome = evaluate(&request_at(30.6, 31.1), &site);
        assert!(!outcome.within_geofence);
        // Roughly 9.7 km from the site, far past the 50 m radius.
        assert!(outcome.distance_meters > 9_000.0);
        assert!(outcome.distance_meters < 11_000.0);
    }

    #[test]
    fn boundary_is_inclusive() {
        // A site whose radius equals the exact distance to the point must
        // classify it inside.
        let site = ReferenceSite::default();
        let point = GeoPoint::new(30.6, 31.1);
        let exact = point.distance_meters(&site.location);

        let boundary_site = ReferenceSite {
            location: site.location,
            radius_meters: exact,
        };
        let outcome = evaluate(&request_at(point.latitude, point.longitude), &boundary_site);
        assert!(outcome.within_geofence);
    }

    #[test]
    fn client_timestamp_passes_through_verbatim() {
        let site = ReferenceSite::default();
        let mut request = request_at(30.5606667, 31.0100556);
        request.client_timestamp = Some("2024-01-01T00:00:00.000Z".to_string());

        let outcome = evaluate(&request, &site);
        assert_eq!(outcome.timestamp, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn missing_timestamp_defaults_to_server_time() {
        let site = ReferenceSite::default();
        let outcome = evaluate(&request_at(30.5606667, 31.0100556), &site);

        let stamped = DateTime::parse_from_rfc3339(&outcome.timestamp)
            .expect("server timestamp should be valid RFC 3339");
        let age = Utc::now().signed_duration_since(stamped);
        assert!(age.num_seconds().abs() < 5);
    }

    #[test]
    fn evaluate_is_deterministic_for_identical_input() {
        let site = ReferenceSite::default();
        let mut request = request_at(30.561, 31.0105);
        request.client_timestamp = Some("2024-06-01T08:30:00.000Z".to_string());

        let first = evaluate(&request, &site);
        let second = evaluate(&request, &site);
        assert_eq!(first, second);
    }

    #[test]
    fn reported_distance_is_rounded_to_two_places() {
        let site = ReferenceSite::default();
        let outcome = evaluate(&request_at(30.5608, 31.0102), &site);
        let rounded = (outcome.distance_meters * 100.0).round() / 100.0;
        assert_eq!(outcome.distance_meters, rounded);
    }
}
