use actix_web::{http::header::ContentType, HttpResponse, Responder};

/// Liveness probe; does not touch DevOps or the renderer.
pub async fn status() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}
