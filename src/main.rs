use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use assistant_backend::db::{self, AssistantStore, PgAssistantStore};
use assistant_backend::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Connect once at startup; a failure here is fatal to the process.
    let pool = db::create_pool().await;
    let store: Arc<dyn AssistantStore> = Arc::new(PgAssistantStore::new(pool));
    let store = web::Data::from(store);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    info!("Starting server at 127.0.0.1:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(routes)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
