use crate::feature::ValidationError;
use actix_web::{http::StatusCode, web::Json, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;
use strum::Display;

pub type RestResult<T, E = RestApiError> = std::result::Result<Json<T>, E>;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
    pub error: String,
}

impl RestApiError {
    pub fn new(
        code: RestApiErrorCode,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            error: error.into(),
        }
    }

    pub fn invalid_data(error: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::InvalidData, "Invalid data format.", error)
    }
}

impl From<ValidationError> for RestApiError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_data(error.to_string())
    }
}

#[derive(Debug, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RestApiErrorCode {
    InvalidData,
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidData => StatusCode::BAD_REQUEST,
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "status": "error",
            "message": self.message,
            "error": self.error,
        });
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

#[cfg(test)]
mod test {
    use super::{RestApiError, RestApiErrorCode};
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn invalid_data_is_bad_request() {
        let err = RestApiError::invalid_data("missing field `geometry`");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid_data: Invalid data format.");
        assert_eq!(RestApiErrorCode::InvalidData.to_string(), "invalid_data");
    }
}
