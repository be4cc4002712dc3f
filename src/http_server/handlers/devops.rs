use super::error::ApiError;
use crate::{
    devops::{ConfigSource, DevOpsConfig},
    diagram::DiagramGenerator,
};
use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DiagramQuery {
    path: Option<String>,
}

/// Renders the diagram stored at `?path=` in the configured repository.
pub async fn generate(
    generator: web::Data<DiagramGenerator>,
    config_source: web::Data<dyn ConfigSource>,
    query: web::Query<DiagramQuery>,
) -> Result<HttpResponse, ApiError> {
    let path = query.into_inner().path.ok_or_else(|| {
        let err = ApiError::MissingParameter("path");
        log::error!("{}", err);
        err
    })?;

    let config = DevOpsConfig::load(config_source.get_ref()).map_err(|err| {
        log::error!("{}", err);
        err
    })?;
    let image = generator.generate(&config, &path).await.map_err(|err| {
        log::error!("unexpected error generating the diagram: {}", err);
        err
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::png())
        .body(image))
}
