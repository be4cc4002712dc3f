use super::error::ApiError;
use crate::{
    consts::SAMPLE_DIAGRAM,
    diagram::{DiagramSource, Renderer},
};
use actix_web::{http::header::ContentType, web, HttpResponse};

const GENERATION_ERROR: &str = "Error generating the diagram from the source content";

/// Renders a fixed `Bob -> Alice` diagram to check the renderer works.
pub async fn sample(renderer: web::Data<dyn Renderer>) -> Result<HttpResponse, ApiError> {
    let source = DiagramSource::from(SAMPLE_DIAGRAM);
    match renderer.render(&source).await {
        Ok(image) if !image.is_empty() => Ok(HttpResponse::Ok()
            .content_type(ContentType::png())
            .body(image)),
        Ok(_) => Err(ApiError::BadRequest(GENERATION_ERROR)),
        Err(err) => {
            log::error!("unable to generate the sample diagram: {}", err);
            Err(ApiError::BadRequest(GENERATION_ERROR))
        }
    }
}
