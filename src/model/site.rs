use crate::model::geo::GeoPoint;

// Company location and geofence radius, used unless overridden by env.
pub const DEFAULT_COMPANY_LAT: f64 = 30.5606667;
pub const DEFAULT_COMPANY_LNG: f64 = 31.0100556;
pub const DEFAULT_GEOFENCE_RADIUS_M: f64 = 50.0;

/// The fixed site that incoming locations are evaluated against.
/// Built once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSite {
    pub location: GeoPoint,
    pub radius_meters: f64,
}

impl Default for ReferenceSite {
    fn default() -> Self {
        Self {
            location: GeoPoint::new(DEFAULT_COMPANY_LAT, DEFAULT_COMPANY_LNG),
            radius_meters: DEFAULT_GEOFENCE_RADIUS_M,
        }
    }
}
