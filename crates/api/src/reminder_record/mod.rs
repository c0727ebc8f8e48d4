use actix_web::web;

mod confirm_reminder_record;
mod create_reminder_record;
mod delete_reminder_record;
mod draft_reminder_record;
mod get_reminder_record;
mod get_reminder_record_audit;
mod get_reminder_record_tasks;
mod get_reminder_records;
mod send_deadline_reminders;
mod update_reminder_record;

use confirm_reminder_record::confirm_reminder_record_controller;
use create_reminder_record::create_reminder_record_controller;
use delete_reminder_record::delete_reminder_record_controller;
use draft_reminder_record::draft_reminder_record_controller;
use get_reminder_record::get_reminder_record_controller;
use get_reminder_record_audit::get_reminder_record_audit_controller;
use get_reminder_record_tasks::get_reminder_record_tasks_controller;
use get_reminder_records::get_reminder_records_controller;
pub use send_deadline_reminders::SendDeadlineRemindersUseCase;
use update_reminder_record::update_reminder_record_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminder",
        web::post().to(create_reminder_record_controller),
    );
    cfg.route("/reminder", web::get().to(get_reminder_records_controller));

    cfg.route(
        "/reminder/{reminder_record_id}",
        web::get().to(get_reminder_record_controller),
    );
    cfg.route(
        "/reminder/{reminder_record_id}",
        web::put().to(update_reminder_record_controller),
    );
    cfg.route(
        "/reminder/{reminder_record_id}",
        web::delete().to(delete_reminder_record_controller),
    );

    cfg.route(
        "/reminder/{reminder_record_id}/confirm",
        web::post().to(confirm_reminder_record_controller),
    );
    cfg.route(
        "/reminder/{reminder_record_id}/draft",
        web::post().to(draft_reminder_record_controller),
    );

    cfg.route(
        "/reminder/{reminder_record_id}/audit",
        web::get().to(get_reminder_record_audit_controller),
    );
    cfg.route(
        "/reminder/{reminder_record_id}/tasks",
        web::get().to(get_reminder_record_tasks_controller),
    );
}
