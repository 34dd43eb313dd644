pub mod cards;
pub mod health;

use actix_web::web;

/// Register every HTTP route of the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::controllers::configure(cfg);
    cards::controllers::configure(cfg);
}
