use super::{configure_router, DevOpsRouter, DiagnosticsRouter, Router};
use crate::{
    devops::{ConfigSource, DevOpsConfig, DevOpsRepository, EnvSource},
    diagram::{DiagramGenerator, PlantUmlRenderer, Renderer},
    http_server::handlers::status,
    rest_client::RestClient,
    settings::Settings,
};
use actix_web::web;
use std::sync::Arc;

pub struct AppRouter {
    devops: DevOpsRouter,
    diagnostics: Option<DiagnosticsRouter>,
}

impl AppRouter {
    /// Production wiring: credentials from the process environment,
    /// diagrams rendered by the configured PlantUML executable.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        if let Err(err) = DevOpsConfig::from_env() {
            log::warn!("{}; diagram requests will fail until it is set", err);
        }
        let renderer = Arc::new(PlantUmlRenderer::new(
            settings.renderer.command.clone(),
            settings.renderer.args.clone(),
        ));
        Self::with_components(settings, Arc::new(EnvSource), renderer)
    }

    pub fn with_components(
        settings: &Settings,
        config_source: Arc<dyn ConfigSource>,
        renderer: Arc<dyn Renderer>,
    ) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder().build()?;

        let repository = DevOpsRepository::new(
            RestClient::new(settings.devops.base_url.clone(), http_client.clone()),
            settings.devops.api_version.clone(),
        );
        let devops = DevOpsRouter::new(
            DiagramGenerator::new(repository, renderer.clone()),
            config_source,
        );
        let diagnostics = settings.diagnostics.enabled.then(|| {
            DiagnosticsRouter::new(
                renderer,
                RestClient::new(settings.diagnostics.test_http_url.clone(), http_client),
            )
        });

        Ok(Self {
            devops,
            diagnostics,
        })
    }
}

impl Router for AppRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .route("/health", web::get().to(status::status))
            .service(
                web::scope("/api")
                    .configure(configure_router(&self.devops))
                    .configure(configure_router(&self.diagnostics)),
            );
    }
}
