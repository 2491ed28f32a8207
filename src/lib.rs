pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;

use actix_web::error::ErrorBadRequest;
use actix_web::web;

/// Route table shared by the binary and the integration tests. The
/// `PathConfig` handler rejects non-integer path ids with 400 instead of
/// actix's default 404 for path deserialization failures.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| ErrorBadRequest(err)))
        .service(
            web::resource("/create")
                .route(web::post().to(handlers::assistant::create_assistant)),
        )
        .service(
            web::resource("/assistant/{id}")
                .route(web::get().to(handlers::assistant::get_assistant))
                .route(web::put().to(handlers::assistant::update_assistant))
                .route(web::delete().to(handlers::assistant::delete_assistant)),
        )
        .service(
            web::resource("/test")
                .route(web::get().to(handlers::assistant::greeting)),
        );
}
