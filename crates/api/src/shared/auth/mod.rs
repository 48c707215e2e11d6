use crate::error::ServiceSwapError;
use actix_web::{
    cookie::{Cookie, SameSite},
    HttpRequest,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service_swap_infra::{Config, ServiceSwapContext};

/// Name of the http-only cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the caller
    pub email: String,
    pub iat: i64, // Issued at (as UTC timestamp)
    pub exp: i64, // Expiration time (as UTC timestamp)
    /// Whatever else was submitted when the session was created
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn new(email: String, mut extra: Map<String, Value>, ctx: &ServiceSwapContext) -> Self {
        for reserved in ["email", "iat", "exp"] {
            extra.remove(reserved);
        }
        let iat = ctx.sys.get_timestamp();
        Self {
            email,
            iat,
            exp: iat + ctx.config.access_token_expiry_secs,
            extra,
        }
    }
}

pub fn create_session_token(
    claims: &Claims,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    let key = EncodingKey::from_secret(config.access_token_secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &key)
}

fn decode_session_token(token: &str, config: &Config) -> jsonwebtoken::errors::Result<Claims> {
    let key = DecodingKey::from_secret(config.access_token_secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256)).map(|data| data.claims)
}

pub fn session_cookie(token: String, config: &Config) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(same_site(config))
        .finish()
}

pub fn removal_cookie(config: &Config) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), config);
    cookie.make_removal();
    cookie
}

// Cross site cookies are only accepted by browsers when they are also secure
fn same_site(config: &Config) -> SameSite {
    if config.secure_cookies {
        SameSite::None
    } else {
        SameSite::Lax
    }
}

/// Verifies the session token cookie and returns its claims
pub fn protect_route(
    req: &HttpRequest,
    ctx: &ServiceSwapContext,
) -> Result<Claims, ServiceSwapError> {
    let token = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            return Err(ServiceSwapError::Unauthorized(format!(
                "Unable to find session token in `{}` cookie",
                SESSION_COOKIE
            )))
        }
    };

    decode_session_token(&token, &ctx.config)
        .map_err(|e| ServiceSwapError::Unauthorized(format!("Invalid session token: {}", e)))
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;
    use serde_json::json;

    fn setup_context() -> ServiceSwapContext {
        let mut ctx = ServiceSwapContext::create_inmemory();
        ctx.config.access_token_secret = "test-secret".into();
        ctx
    }

    fn get_token(ctx: &ServiceSwapContext, expired: bool) -> String {
        let mut claims = Claims::new(get_email(), Map::new(), ctx);
        if expired {
            claims.iat = 10;
            claims.exp = 100; // year 1970
        }
        create_session_token(&claims, &ctx.config).unwrap()
    }

    fn get_email() -> String {
        String::from("alice@example.com")
    }

    fn req_with_token(token: &str) -> HttpRequest {
        TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, token.to_string()))
            .to_http_request()
    }

    #[test]
    fn creates_claims_with_expiry() {
        let ctx = setup_context();
        let mut extra = Map::new();
        extra.insert("exp".into(), json!(1));
        extra.insert("name".into(), json!("Alice"));
        let claims = Claims::new(get_email(), extra, &ctx);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.extra.get("name"), Some(&json!("Alice")));
        assert!(claims.extra.get("exp").is_none());
    }

    #[test]
    fn decodes_valid_token() {
        let ctx = setup_context();
        let token = get_token(&ctx, false);
        let claims = protect_route(&req_with_token(&token), &ctx).unwrap();
        assert_eq!(claims.email, get_email());
    }

    #[test]
    fn rejects_expired_token() {
        let ctx = setup_context();
        let token = get_token(&ctx, true);
        let res = protect_route(&req_with_token(&token), &ctx);
        assert!(matches!(res, Err(ServiceSwapError::Unauthorized(_))));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let ctx = setup_context();
        let token = get_token(&ctx, false);
        let mut other_ctx = setup_context();
        other_ctx.config.access_token_secret = "other-secret".into();
        assert!(protect_route(&req_with_token(&token), &other_ctx).is_err());
    }

    #[test]
    fn rejects_garbage_token() {
        let ctx = setup_context();
        assert!(protect_route(&req_with_token("sajfosajfposajfopaso12"), &ctx).is_err());
    }

    #[test]
    fn rejects_req_without_cookie() {
        let ctx = setup_context();
        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).is_err());
    }

    #[test]
    fn builds_http_only_cookies() {
        let ctx = setup_context();
        let cookie = session_cookie("abc".into(), &ctx.config);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));

        let removal = removal_cookie(&ctx.config);
        assert_eq!(removal.value(), "");
        assert_eq!(
            removal.max_age(),
            Some(actix_web::cookie::time::Duration::ZERO)
        );
    }
}
