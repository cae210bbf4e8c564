use crate::{
    api::{attendance, leave_request},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, middleware::Condition, web};
use serde_json::json;

// Helper to build the per-IP limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let burst = requests_per_min.max(1);
    let per_ms = (60_000 / u64::from(burst)).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(burst)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("governor config with non-zero period and burst");
    Governor::new(&cfg)
}

fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::warn!(error = %message, "Rejected JSON payload");
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(json!({ "message": message })),
            )
            .into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    let limiter = Condition::new(config.rate_per_min > 0, build_limiter(config.rate_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(limiter) // rate limiting
            .app_data(json_config(config.max_payload_bytes))
            .service(
                web::scope("/leave")
                    .service(web::resource("/rows").route(web::post().to(leave_request::leave_rows)))
                    .service(
                        web::resource("/resolve").route(web::post().to(leave_request::resolve_leave)),
                    )
                    .service(
                        web::resource("/window").route(web::post().to(leave_request::status_window)),
                    )
                    .service(web::resource("/on-leave").route(web::post().to(leave_request::on_leave)))
                    .service(
                        web::resource("/overview").route(web::post().to(leave_request::leave_overview)),
                    )
                    .service(
                        web::resource("/search").route(web::post().to(leave_request::search_leave)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    .service(web::resource("/calendar").route(web::post().to(attendance::calendar)))
                    .service(web::resource("/window").route(web::post().to(attendance::day_window)))
                    .service(
                        web::resource("/snapshot").route(web::post().to(attendance::day_snapshot)),
                    )
                    .service(
                        web::resource("/search").route(web::post().to(attendance::search_attendance)),
                    ),
            ),
    );
}
