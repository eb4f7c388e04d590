use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_matching_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use housing_match::config::AppConfig;
use housing_match::error::AppError;
use housing_match::telemetry;
use housing_match::workflows::catalog::CatalogLoader;
use housing_match::workflows::matching::{MatchingConfig, MatchingService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.matching.catalog_path = catalog;
    }
    if let Some(top_n) = args.top_n.take() {
        config.matching.top_n = top_n as usize;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = CatalogLoader::from_path(&config.matching.catalog_path)?;
    info!(
        path = %config.matching.catalog_path.display(),
        agencies = catalog.len(),
        "agency catalog ready"
    );
    let matching_service = Arc::new(MatchingService::new(
        Arc::new(catalog),
        MatchingConfig::with_top_n(config.matching.top_n),
    ));

    let app = with_matching_routes(matching_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, top_n = config.matching.top_n, "housing match service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
