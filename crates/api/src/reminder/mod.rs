pub mod send_reminders;
mod send_test_email;

use actix_web::web;
use send_reminders::send_reminders_controller;
use send_test_email::send_test_email_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/cron/send-reminders",
        web::get().to(send_reminders_controller),
    );
    cfg.route("/test-email-send", web::get().to(send_test_email_controller));
}
