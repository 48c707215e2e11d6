use crate::{
    error::ServiceSwapError,
    shared::{
        auth::{create_session_token, session_cookie, Claims},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};
use service_swap_api_structs::create_session::*;
use service_swap_api_structs::dtos::SuccessDTO;
use service_swap_infra::ServiceSwapContext;

pub async fn create_session_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let body = body.into_inner();
    let usecase = CreateSessionUseCase {
        email: body.email,
        extra: body.extra,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let res: APIResponse = SuccessDTO::new();
            HttpResponse::Ok()
                .cookie(session_cookie(usecase_res.token, &ctx.config))
                .json(res)
        })
        .map_err(ServiceSwapError::from)
}

#[derive(Debug)]
struct CreateSessionUseCase {
    email: String,
    extra: Map<String, Value>,
}

#[derive(Debug)]
struct UseCaseRes {
    pub token: String,
}

#[derive(Debug)]
enum UseCaseError {
    SigningFailed(String),
}

impl From<UseCaseError> for ServiceSwapError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::SigningFailed(_) => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateSessionUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateSession";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        let claims = Claims::new(self.email.clone(), std::mem::take(&mut self.extra), ctx);

        create_session_token(&claims, &ctx.config)
            .map(|token| UseCaseRes { token })
            .map_err(|e| UseCaseError::SigningFailed(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::auth::{protect_route, SESSION_COOKIE};
    use actix_web::{cookie::Cookie, test::TestRequest};
    use serde_json::json;

    #[actix_web::main]
    #[test]
    async fn issues_token_for_caller() {
        let ctx = ServiceSwapContext::create_inmemory();
        let mut extra = Map::new();
        extra.insert("displayName".into(), json!("Alice"));
        let mut usecase = CreateSessionUseCase {
            email: "alice@example.com".into(),
            extra,
        };

        let res = usecase.execute(&ctx).await.unwrap();
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, res.token))
            .to_http_request();
        let claims = protect_route(&req, &ctx).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.extra.get("displayName"), Some(&json!("Alice")));
    }
}
