//! HTTP front-end for the EV dashboard.
//!
//! Serves the same choices and reports as the terminal front-end as JSON,
//! plus the rendered chart as SVG.
pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use ttev_analysis::API;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Route table, shared by the server and its tests.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .route("/scenarios", web::get().to(handlers::scenarios))
                .route("/actions",   web::get().to(handlers::actions))
                .route("/spins",     web::get().to(handlers::spins))
                .route("/render",    web::post().to(handlers::render))
                .route("/chart",     web::post().to(handlers::chart)),
        );
}

pub async fn run() -> Result<(), std::io::Error> {
    let root = ttev_core::data_dir();
    let addr = ttev_core::bind_addr();
    let api = web::Data::new(API::from_dir(root));
    log::info!("starting dashboard server on {}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(api.clone())
            .configure(routes)
    })
    .workers(ttev_core::workers())
    .bind(addr)?
    .run()
    .await
}
