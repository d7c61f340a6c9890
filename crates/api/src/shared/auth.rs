use crate::error::StationError;
use actix_web::HttpRequest;
use flowerstation_domain::{User, ID};
use flowerstation_infra::StationContext;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Sessions are valid for 30 days
const SESSION_LIFETIME_SECS: i64 = 60 * 60 * 24 * 30;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    exp: i64,        // Expiration time (as UTC timestamp)
    iat: i64,        // Issued at (as UTC timestamp)
    user_id: String, // Subject (whom token refers to)
}

fn parse_authtoken_header(token_header_value: &str) -> &str {
    let token = token_header_value.trim();
    token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .unwrap_or(token)
        .trim()
}

fn get_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .map(parse_authtoken_header)
}

pub fn create_session_token(user_id: &ID, ctx: &StationContext) -> Result<String, StationError> {
    let iat = ctx.sys.get_timestamp_millis() / 1000;
    let claims = Claims {
        exp: iat + SESSION_LIFETIME_SECS,
        iat,
        user_id: user_id.to_string(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(ctx.config.session_secret.as_bytes()),
    )
    .map_err(|_| StationError::InternalError)
}

fn decode_token(token: &str, ctx: &StationContext) -> anyhow::Result<ID> {
    // Expiry is checked against the context clock instead of the system time
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(ctx.config.session_secret.as_bytes()),
        &validation,
    )?
    .claims;

    if claims.exp <= ctx.sys.get_timestamp_millis() / 1000 {
        anyhow::bail!("Session token has expired");
    }
    Ok(claims.user_id.parse()?)
}

/// Resolves the `User` of the session bearer token
pub async fn protect_route(req: &HttpRequest, ctx: &StationContext) -> Result<User, StationError> {
    let token = get_bearer_token(req)
        .ok_or_else(|| StationError::Unauthorized("You must be logged in".into()))?;
    let user_id = decode_token(token, ctx)
        .map_err(|_| StationError::Unauthorized("Invalid session token".into()))?;

    ctx.repos
        .users
        .find(&user_id)
        .await
        .ok_or_else(|| StationError::Unauthorized("Unable to find user from credentials".into()))
}

/// Only lets requests through that carry the cron secret as a bearer token.
/// Everything passes when no cron secret is configured.
pub fn protect_cron_route(req: &HttpRequest, ctx: &StationContext) -> Result<(), StationError> {
    let secret = match &ctx.config.cron_secret {
        Some(secret) => secret,
        None => return Ok(()),
    };
    match get_bearer_token(req) {
        Some(token) if token == secret => Ok(()),
        _ => Err(StationError::Unauthorized("Unauthorized".into())),
    }
}

/// Requests from the authentication provider carry the create user secret
/// in the `x-api-key` header
pub fn protect_create_user_route(req: &HttpRequest, ctx: &StationContext) -> Result<(), StationError> {
    let api_key = req
        .headers()
        .get("x-api-key")
        .and_then(|header| header.to_str().ok());
    match api_key {
        Some(key) if key == ctx.config.create_user_secret_code => Ok(()),
        _ => Err(StationError::Unauthorized(
            "Invalid x-api-key header provided".into(),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;
    use flowerstation_infra::StaticTimeSys;
    use std::sync::Arc;

    fn ctx_at(now: i64) -> StationContext {
        let mut ctx = StationContext::create_inmemory();
        ctx.config.session_secret = "session-secret".into();
        ctx.config.cron_secret = Some("cron-secret".into());
        ctx.sys = Arc::new(StaticTimeSys(now));
        ctx
    }

    #[test]
    fn parses_bearer_header() {
        assert_eq!(parse_authtoken_header("Bearer abc"), "abc");
        assert_eq!(parse_authtoken_header("bearer abc "), "abc");
        assert_eq!(parse_authtoken_header("abc"), "abc");
    }

    #[actix_web::main]
    #[test]
    async fn accepts_issued_session_tokens() {
        let ctx = ctx_at(chrono::Utc::now().timestamp_millis());
        let user = User::new("Ada".into(), "ada@example.com".into(), 0);
        ctx.repos.users.insert(&user).await.unwrap();
        let token = create_session_token(&user.id, &ctx).unwrap();

        let req = TestRequest::default()
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_http_request();
        let found = protect_route(&req, &ctx).await.unwrap();
        assert_eq!(found.id, user.id);

        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_expired_and_foreign_tokens() {
        let ctx = ctx_at(chrono::Utc::now().timestamp_millis());
        let user = User::new("Ada".into(), "ada@example.com".into(), 0);
        ctx.repos.users.insert(&user).await.unwrap();

        let expired = create_session_token(&user.id, &ctx_at(0)).unwrap();
        let req = TestRequest::default()
            .insert_header(("authorization", format!("Bearer {}", expired)))
            .to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());

        let mut other = ctx_at(chrono::Utc::now().timestamp_millis());
        other.config.session_secret = "another-secret".into();
        let foreign = create_session_token(&user.id, &other).unwrap();
        let req = TestRequest::default()
            .insert_header(("authorization", format!("Bearer {}", foreign)))
            .to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());
    }

    #[test]
    fn guards_cron_route_with_secret() {
        let mut ctx = ctx_at(0);
        let req = TestRequest::default()
            .insert_header(("authorization", "Bearer cron-secret"))
            .to_http_request();
        assert!(protect_cron_route(&req, &ctx).is_ok());

        let req = TestRequest::default()
            .insert_header(("authorization", "Bearer wrong"))
            .to_http_request();
        assert!(protect_cron_route(&req, &ctx).is_err());
        let req = TestRequest::default().to_http_request();
        assert!(protect_cron_route(&req, &ctx).is_err());

        ctx.config.cron_secret = None;
        assert!(protect_cron_route(&req, &ctx).is_ok());
    }
}
