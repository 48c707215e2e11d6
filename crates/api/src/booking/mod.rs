mod create_booking;
mod delete_booking;
mod get_bookings;
mod update_booking_status;

use actix_web::web;
use create_booking::create_booking_controller;
use delete_booking::delete_booking_controller;
use get_bookings::get_bookings_controller;
use update_booking_status::update_booking_status_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/booking", web::post().to(create_booking_controller));
    cfg.route("/booking", web::get().to(get_bookings_controller));
    cfg.route("/booking", web::delete().to(delete_booking_controller));
    cfg.route("/booking", web::put().to(update_booking_status_controller));
}
