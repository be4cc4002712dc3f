use super::error::ApiError;
use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HelloQuery {
    name: Option<String>,
}

/// Greets the `name` given in the request body or, failing that, the query.
pub async fn hello(query: web::Query<HelloQuery>, body: String) -> Result<HttpResponse, ApiError> {
    log::info!("hello request received");
    let name = Some(body)
        .filter(|body| !body.is_empty())
        .or_else(|| query.into_inner().name)
        .ok_or(ApiError::BadRequest(
            "Please pass a name on the query string or in the request body",
        ))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Hello, {name}")))
}
