use actix_web::web;

pub mod admin;
pub mod devices;
pub mod games;
pub mod health;
pub mod leaderboard;

/// Every route the service exposes. Shared by `main` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(admin::dashboard));

    cfg.service(web::scope("/health").configure(health::configure_routes));

    cfg.service(
        web::scope("/api")
            .configure(games::configure_routes)
            .configure(leaderboard::configure_routes)
            .configure(devices::configure_routes),
    );

    cfg.service(web::scope("/admin").configure(admin::configure_routes));
}
