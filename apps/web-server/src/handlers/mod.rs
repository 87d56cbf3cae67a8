//! HTTP handlers and route configuration.

mod api;
mod auth;
mod health;
mod home;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        // Pages
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create))
                .route("/new", web::get().to(posts::new_form))
                .route("/{id}", web::get().to(posts::show))
                .route("/{id}/delete", web::post().to(posts::delete)),
        )
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/posts", web::get().to(api::list_posts))
                // Auth routes
                .service(
                    web::scope("/auth")
                        .route("/login", web::get().to(auth::login))
                        .route("/register", web::get().to(auth::register))
                        .route("/callback", web::get().to(auth::callback))
                        .route("/logout", web::get().to(auth::logout))
                        .route("/me", web::get().to(auth::me)),
                ),
        );
}
