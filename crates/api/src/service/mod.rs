mod create_service;
mod delete_service;
mod get_service;
mod get_services;
mod update_service;

use actix_web::web;
use create_service::create_service_controller;
use delete_service::delete_service_controller;
use get_service::get_service_controller;
use get_services::get_services_controller;
use update_service::update_service_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/services", web::get().to(get_services_controller));
    cfg.route("/services", web::post().to(create_service_controller));
    cfg.route(
        "/services/{service_id}",
        web::delete().to(delete_service_controller),
    );
    cfg.route("/service/{service_id}", web::get().to(get_service_controller));
    cfg.route(
        "/service/{service_id}",
        web::put().to(update_service_controller),
    );
}
