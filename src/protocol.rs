use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

const INTERNAL_ERROR_DETAIL: &str = "Lỗi hệ thống, vui lòng thử lại sau";

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    InvalidRange(String),

    #[error("data source error")]
    DataSource(#[from] anyhow::Error),

    #[error("csv render error")]
    Render(#[from] csv::Error),
}

impl ResponseError for ExportError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExportError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            ExportError::DataSource(_) | ExportError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ExportError::InvalidRange(msg) => {
                log::info!("rejected export request: {}", msg);
                msg.clone()
            }
            ExportError::DataSource(err) => {
                log::error!("export query failed: {:#}", err);
                INTERNAL_ERROR_DETAIL.to_string()
            }
            ExportError::Render(err) => {
                log::error!("export rendering failed: {}", err);
                INTERNAL_ERROR_DETAIL.to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn maps_to_status_codes() {
        let err = ExportError::InvalidRange("bad".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);

        let err = ExportError::from(anyhow!("connection refused"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "data source error");
    }
}
