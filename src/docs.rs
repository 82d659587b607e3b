use crate::api::attendance::CheckinResponse;
use crate::model::geo::GeoPoint;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geofence Attendance API",
        version = "1.0.0",
        description = r#"
## Geofenced Attendance Service

Records attendance events (check-in / check-out) and verifies that the
reporting device is physically within the company geofence.

### 🔹 How it works
- The device posts its coordinates to the check-in endpoint
- The service computes the great-circle (haversine) distance to the company location
- Inside the geofence radius → attendance accepted (200)
- Outside the geofence radius → attendance rejected (403)

### 📦 Response Format
- JSON-based RESTful responses
- The full evaluation (distance, coordinates, geofence parameters) is echoed in every response

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::check_in,
    ),
    components(
        schemas(
            CheckinResponse,
            GeoPoint
        )
    ),
    tags(
        (name = "Attendance", description = "Geofenced attendance APIs"),
    )
)]
pub struct ApiDoc;
