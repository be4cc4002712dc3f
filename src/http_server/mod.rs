pub mod handlers;
mod routers;

pub use self::routers::{configure_router, AppRouter, Router};

use crate::{metrics::Metrics, settings::Settings};
use actix_web::{middleware::Logger, App, HttpServer};
use std::sync::Arc;

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let app_router = Arc::new(AppRouter::new(&settings)?);
    run_with_router(settings, app_router).await
}

pub async fn run_with_router(settings: Settings, app_router: Arc<AppRouter>) -> anyhow::Result<()> {
    let socket_addr = settings.server.addr;
    let metrics = settings
        .metrics
        .enabled
        .then(|| Metrics::new(&settings.metrics.route))
        .transpose()?;

    log::info!("azuml server is starting at {}", socket_addr);
    let server = match metrics.as_ref().map(|metrics| metrics.middleware().clone()) {
        Some(middleware) => HttpServer::new(move || {
            App::new()
                .wrap(middleware.clone())
                .wrap(Logger::default())
                .configure(configure_router(&*app_router))
        })
        .bind(socket_addr)?
        .run(),
        None => HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .configure(configure_router(&*app_router))
        })
        .bind(socket_addr)?
        .run(),
    };

    let mut futures = vec![tokio::spawn(async move {
        server.await.map_err(anyhow::Error::from)
    })];
    if let Some(metrics) = metrics {
        let addr = settings.metrics.addr;
        log::info!("metrics server is starting at {}", addr);
        let metrics_server = metrics.run_server(addr)?;
        futures.push(tokio::spawn(async move {
            metrics_server.await.map_err(anyhow::Error::from)
        }));
    }

    let (res, _, others) = futures::future::select_all(futures).await;
    for future in others.into_iter() {
        future.abort()
    }
    res?
}
