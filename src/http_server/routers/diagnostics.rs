use super::Router;
use crate::{
    diagram::Renderer,
    http_server::handlers::{hello, test_diagram, test_http},
    rest_client::RestClient,
};
use actix_web::web;
use std::sync::Arc;

/// Endpoints used to check a deployment: renderer, outbound http, routing.
pub struct DiagnosticsRouter {
    renderer: web::Data<dyn Renderer>,
    http_client: web::Data<RestClient>,
}

impl DiagnosticsRouter {
    pub fn new(renderer: Arc<dyn Renderer>, http_client: RestClient) -> Self {
        Self {
            renderer: web::Data::from(renderer),
            http_client: web::Data::new(http_client),
        }
    }
}

impl Router for DiagnosticsRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .app_data(self.renderer.clone())
            .app_data(self.http_client.clone())
            .route("/TestDiagram", web::get().to(test_diagram::sample))
            .route("/TestHttp", web::get().to(test_http::probe))
            .service(
                web::resource("/Hello")
                    .route(web::get().to(hello::hello))
                    .route(web::post().to(hello::hello)),
            );
    }
}
