//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod health;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/health", web::get().to(health::health_check))
        // Auth routes
        .route("/signup/", web::post().to(auth::signup))
        .route("/login/", web::post().to(auth::login))
        .route("/logout/", web::post().to(auth::logout))
        // Blog routes
        .service(
            web::resource("/blogs")
                .route(web::get().to(blogs::list_blogs))
                .route(web::post().to(blogs::create_blog)),
        )
        .service(
            web::resource("/blogs/{blog_id}")
                .route(web::get().to(blogs::get_blog))
                .route(web::patch().to(blogs::update_blog))
                .route(web::delete().to(blogs::delete_blog)),
        );
}
