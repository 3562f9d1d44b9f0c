use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use sqlx::PgPool;

use tracing_actix_web::TracingLogger;

use crate::controller::{facilities, subscription_tokens, subscriptions};
use crate::repo::Stores;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("I am alive")
}

/// Register every endpoint on an application
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(facilities::scope())
        .service(subscriptions::scope())
        .service(subscription_tokens::scope());
}

/// Run the application on a specified TCP listener
pub fn run(listener: TcpListener, pool: PgPool) -> anyhow::Result<Server> {
    let stores = Stores::postgres(&pool);

    // Wrap application data
    let pool = web::Data::new(pool);
    let facilities = web::Data::from(stores.facilities);
    let subscriptions = web::Data::from(stores.subscriptions);
    let subscription_tokens = web::Data::from(stores.subscription_tokens);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(facilities.clone())
            .app_data(subscriptions.clone())
            .app_data(subscription_tokens.clone())
            .configure(routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
