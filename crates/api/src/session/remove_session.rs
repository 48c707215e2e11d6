use crate::shared::auth::removal_cookie;
use actix_web::{web, HttpResponse};
use service_swap_api_structs::dtos::SuccessDTO;
use service_swap_api_structs::remove_session::*;
use service_swap_infra::ServiceSwapContext;

/// Logging out only needs the browser to drop the cookie, tokens are not
/// tracked by the server.
pub async fn remove_session_controller(ctx: web::Data<ServiceSwapContext>) -> HttpResponse {
    let res: APIResponse = SuccessDTO::new();
    HttpResponse::Ok()
        .cookie(removal_cookie(&ctx.config))
        .json(res)
}
