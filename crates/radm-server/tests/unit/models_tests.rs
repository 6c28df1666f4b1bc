//! Error translation and API config tests

use radm_domain::error::Error;
use radm_infrastructure::config::ServerConfig;
use radm_server::admin::{AdminApiConfig, ErrorResponse};
use rocket::http::Status;
use std::time::Duration;

#[test]
fn test_status_mapping() {
    let cases = [
        (Error::not_found("node ws:/a"), Status::NotFound, "not_found"),
        (Error::conflict("has children"), Status::Conflict, "conflict"),
        (Error::busy("reindex"), Status::Conflict, "busy"),
        (Error::invalid_argument("bad path"), Status::BadRequest, "invalid_argument"),
        (
            Error::service_unavailable("offline"),
            Status::ServiceUnavailable,
            "service_unavailable",
        ),
        (
            Error::timed_out("reindex", Duration::from_millis(10)),
            Status::GatewayTimeout,
            "timed_out",
        ),
        (
            Error::reindex_failed("store fault"),
            Status::InternalServerError,
            "reindex_failed",
        ),
        (Error::internal("boom"), Status::InternalServerError, "internal_error"),
    ];

    for (err, status, code) in cases {
        let (actual, body) = ErrorResponse::from_error(&err);
        assert_eq!(actual, status, "status for {err}");
        assert_eq!(body.error, code);
        assert_eq!(body.message, err.to_string());
        assert_ne!(body.message, body.error);
    }
}

#[test]
fn test_rocket_statuses_get_codes() {
    assert_eq!(ErrorResponse::for_status(Status::NotFound).1.error, "not_found");
    assert_eq!(
        ErrorResponse::for_status(Status::UnprocessableEntity).1.error,
        "invalid_argument"
    );
    assert_eq!(
        ErrorResponse::for_status(Status::InternalServerError).1.error,
        "internal_error"
    );
}

#[test]
fn test_api_config_from_server_config() {
    let server = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: 9300,
        base_path: "/admin".to_string(),
    };
    let api = AdminApiConfig::from(&server);
    let rocket = api.rocket_config().unwrap();
    assert_eq!(rocket.port, 9300);
    assert_eq!(rocket.address.to_string(), "0.0.0.0");
    assert_eq!(api.base_path, "/admin");

    let bad = AdminApiConfig {
        host: "not-an-ip".to_string(),
        ..api
    };
    assert!(matches!(
        bad.rocket_config().unwrap_err(),
        Error::Configuration { .. }
    ));
}
