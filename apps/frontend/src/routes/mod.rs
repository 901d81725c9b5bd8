use actix_web::web;

pub mod admin;
pub mod drafts;
pub mod home;
pub mod landing;
pub mod matches;
pub mod pit;
pub mod scout;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // drafts must register ahead of scout: /app/scout/draft would otherwise
    // match the {color} segment
    cfg.configure(crate::health::configure_routes)
        .configure(landing::configure_routes)
        .configure(drafts::configure_routes)
        .configure(scout::configure_routes)
        .configure(home::configure_routes)
        .configure(matches::configure_routes)
        .configure(pit::configure_routes)
        .configure(admin::configure_routes);
}
