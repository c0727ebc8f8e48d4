use actix_web::web;

mod get_mail_template;
mod upsert_mail_template;

use get_mail_template::get_mail_template_controller;
use upsert_mail_template::upsert_mail_template_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/template/{identifier}",
        web::put().to(upsert_mail_template_controller),
    );
    cfg.route(
        "/template/{identifier}",
        web::get().to(get_mail_template_controller),
    );
}
