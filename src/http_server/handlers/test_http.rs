use super::error::ApiError;
use crate::rest_client::RestClient;
use actix_web::{http::header::ContentType, web, HttpResponse};
use std::collections::BTreeMap;

const PROBE_PATH: &str = "200";

/// Fetches `{test_http_url}/200` to check outbound connectivity.
pub async fn probe(client: web::Data<RestClient>) -> Result<HttpResponse, ApiError> {
    log::info!("connectivity probe to {}", client.base_url());
    let headers = BTreeMap::from([("accept", "text/plain")]);

    match client.get_text(PROBE_PATH, &headers, &BTreeMap::new()).await? {
        Some(content) => Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(content)),
        None => Err(ApiError::BadRequest("Request could not be processed")),
    }
}
