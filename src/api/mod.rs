pub mod attendance;
pub mod employee;

use actix_web::{HttpResponse, error::InternalError, web};
use serde_json::json;

/// Malformed bodies (missing fields, wrong types, bad dates) answer 422 with a `detail` message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(err, unprocessable(detail)).into()
    })
}

/// Non-numeric `{id}` segments answer 422 as well.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(err, unprocessable(detail)).into()
    })
}

pub(crate) fn unprocessable(detail: impl Into<String>) -> HttpResponse {
    let detail: String = detail.into();
    HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))
}
