use crate::{api::attendance, config::Config};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/attendance")
                // /attendance/checkin
                .service(
                    web::resource("/checkin").route(web::post().to(attendance::check_in)),
                ),
        ),
    );
}
