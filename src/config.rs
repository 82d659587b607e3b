use dotenvy::dotenv;
use std::env;

use crate::model::geo::GeoPoint;
use crate::model::site::{
    DEFAULT_COMPANY_LAT, DEFAULT_COMPANY_LNG, DEFAULT_GEOFENCE_RADIUS_M, ReferenceSite,
};

pub const DEFAULT_ACCEPTED_MESSAGE: &str = "تم تسجيل الحضور بنجاح ✅";
pub const DEFAULT_REJECTED_MESSAGE: &str = "أنت لست داخل الشركة ❌";

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    /// Geofence evaluated against on every request; fixed after startup.
    pub site: ReferenceSite,
    pub accepted_message: String,
    pub rejected_message: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap();

        let site = ReferenceSite {
            location: GeoPoint::new(
                env::var("COMPANY_LAT")
                    .unwrap_or_else(|_| DEFAULT_COMPANY_LAT.to_string())
                    .parse()
                    .unwrap(),
                env::var("COMPANY_LNG")
                    .unwrap_or_else(|_| DEFAULT_COMPANY_LNG.to_string())
                    .parse()
                    .unwrap(),
            ),
            radius_meters: env::var("GEOFENCE_RADIUS_M")
                .unwrap_or_else(|_| DEFAULT_GEOFENCE_RADIUS_M.to_string())
                .parse()
                .unwrap(),
        };

        Self {
            server_addr: format!("0.0.0.0:{}", port),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            site,
            accepted_message: env::var("CHECKIN_ACCEPTED_MESSAGE")
                .unwrap_or_else(|_| DEFAULT_ACCEPTED_MESSAGE.to_string()),
            rejected_message: env::var("CHECKIN_REJECTED_MESSAGE")
                .unwrap_or_else(|_| DEFAULT_REJECTED_MESSAGE.to_string()),
        }
    }
}
