//! Positive integer ids taken from the route path.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

fn parse_path_id(req: &HttpRequest, name: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {name}: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{name} must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

/// `{game_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_id(req, "game_id", ErrorCode::InvalidGameId).map(GameId))
    }
}

/// `{round_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundId(pub i64);

impl FromRequest for RoundId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_id(req, "round_id", ErrorCode::BadRequest).map(RoundId))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[actix_web::test]
    async fn parses_positive_ids() {
        let req = TestRequest::default()
            .param("game_id", "17")
            .to_http_request();
        let id = GameId::extract(&req).await.unwrap();
        assert_eq!(id, GameId(17));
    }

    #[actix_web::test]
    async fn rejects_garbage_and_non_positive() {
        for raw in ["abc", "0", "-4"] {
            let req = TestRequest::default()
                .param("game_id", raw)
                .to_http_request();
            let err = GameId::extract(&req).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidGameId, "{raw}");
        }
    }
}
