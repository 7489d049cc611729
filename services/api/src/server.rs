use crate::cli::ServeArgs;
use crate::infra::{load_engine, AppState, InMemoryProfileRepository};
use crate::routes::with_career_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use riasec_match::career::CareerMatchingService;
use riasec_match::config::AppConfig;
use riasec_match::error::AppError;
use riasec_match::telemetry;
use std::sync::atomic::Ordering;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = load_engine(&config.matching)?;
    let repository = Arc::new(InMemoryProfileRepository::default());
    let matching_service = Arc::new(CareerMatchingService::new(
        engine,
        repository,
        config.matching.match_limit,
    ));

    let app = with_career_routes(matching_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        match_limit = config.matching.match_limit,
        "career matching service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
