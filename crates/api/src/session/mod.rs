mod create_session;
mod remove_session;

use actix_web::web;
use create_session::create_session_controller;
use remove_session::remove_session_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jwt", web::post().to(create_session_controller));
    cfg.route("/jwtremove", web::post().to(remove_session_controller));
}
