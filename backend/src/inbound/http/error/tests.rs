//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;

use super::*;

async fn body_of(error: &Error) -> ErrorBody {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[rstest]
#[case(Error::validation("player name must not be empty"), StatusCode::BAD_REQUEST)]
#[case(Error::transport("expected JSON"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("player 1 not found"), StatusCode::NOT_FOUND)]
#[case(Error::store("player store unavailable"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn body_carries_the_message() {
    let body = body_of(&Error::not_found("player 1 not found")).await;
    assert_eq!(
        body,
        ErrorBody {
            error: "player 1 not found".to_owned()
        }
    );
}

#[rstest]
#[actix_web::test]
async fn internal_details_are_redacted() {
    let body = body_of(&Error::internal("get_player endpoint received a list_players request")).await;
    assert_eq!(body.error, REDACTED_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn store_messages_are_reported() {
    let body = body_of(&Error::store("player store unavailable: refused")).await;
    assert_eq!(body.error, "player store unavailable: refused");
}
