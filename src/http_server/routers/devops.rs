use super::Router;
use crate::{devops::ConfigSource, diagram::DiagramGenerator, http_server::handlers::devops};
use actix_web::web;
use std::sync::Arc;

pub struct DevOpsRouter {
    generator: web::Data<DiagramGenerator>,
    config_source: web::Data<dyn ConfigSource>,
}

impl DevOpsRouter {
    pub fn new(generator: DiagramGenerator, config_source: Arc<dyn ConfigSource>) -> Self {
        Self {
            generator: web::Data::new(generator),
            config_source: web::Data::from(config_source),
        }
    }
}

impl Router for DevOpsRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .app_data(self.generator.clone())
            .app_data(self.config_source.clone())
            .route("/DevOps", web::get().to(devops::generate));
    }
}
