use actix_web::{http::header, HttpResponse};

use super::utils::attachment_header;
use crate::protocol::MessageResponse;

pub fn csv_attachment(file_name: &str, body: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv")
        .header(header::CONTENT_DISPOSITION, attachment_header(file_name))
        .body(body)
}

pub fn no_data(message: String) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse { message })
}
