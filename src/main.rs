//! Tutorlink server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the handlers,
//! and serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutorlink::adapters::http::{
    api_router, AvailabilityHandlers, EvaluationHandlers, MatchingHandlers, SessionHandlers,
};
use tutorlink::adapters::postgres::{
    PostgresAvailabilityRepository, PostgresEvaluationRepository,
    PostgresMatchingRequestRepository, PostgresSessionRepository,
};
use tutorlink::application::handlers::availability::{
    CreateSlotHandler, DeleteSlotHandler, ListTutorSlotsHandler, UpdateSlotHandler,
};
use tutorlink::application::handlers::evaluation::{
    GetEvaluationHandler, ListSessionEvaluationsHandler, ListStudentEvaluationsHandler,
    SubmitEvaluationHandler,
};
use tutorlink::application::handlers::matching::{
    CreateMatchingRequestHandler, DecideMatchingRequestHandler, ListStudentRequestsHandler,
    ListTutorRequestsHandler,
};
use tutorlink::application::handlers::session::{
    CancelSessionHandler, CompleteSessionHandler, GetSessionHandler, ListAllSessionsHandler,
    ListStudentSessionsHandler, ListTutorSessionsHandler, RescheduleSessionHandler,
    ScheduleSessionHandler, UpdateLogisticsHandler,
};
use tutorlink::application::locks::KeyedLocks;
use tutorlink::config::AppConfig;
use tutorlink::ports::SystemClock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Shared infrastructure
    let clock = Arc::new(SystemClock);
    let locks = Arc::new(KeyedLocks::new());

    // Repositories
    let availability_repo = Arc::new(PostgresAvailabilityRepository::new(pool.clone()));
    let matching_repo = Arc::new(PostgresMatchingRequestRepository::new(pool.clone()));
    let session_repo = Arc::new(PostgresSessionRepository::new(pool.clone()));
    let evaluation_repo = Arc::new(PostgresEvaluationRepository::new(pool));

    // Availability handlers
    let availability = AvailabilityHandlers::new(
        Arc::new(CreateSlotHandler::new(availability_repo.clone())),
        Arc::new(UpdateSlotHandler::new(availability_repo.clone())),
        Arc::new(DeleteSlotHandler::new(availability_repo.clone())),
        Arc::new(ListTutorSlotsHandler::new(availability_repo)),
    );

    // Matching handlers
    let matching = MatchingHandlers::new(
        Arc::new(CreateMatchingRequestHandler::new(
            matching_repo.clone(),
            clock.clone(),
        )),
        Arc::new(DecideMatchingRequestHandler::new(
            matching_repo.clone(),
            locks.clone(),
        )),
        Arc::new(ListStudentRequestsHandler::new(matching_repo.clone())),
        Arc::new(ListTutorRequestsHandler::new(matching_repo)),
    );

    // Session handlers
    let sessions = SessionHandlers::new(
        Arc::new(ScheduleSessionHandler::new(
            session_repo.clone(),
            locks.clone(),
        )),
        Arc::new(RescheduleSessionHandler::new(
            session_repo.clone(),
            locks.clone(),
        )),
        Arc::new(CancelSessionHandler::new(session_repo.clone())),
        Arc::new(CompleteSessionHandler::new(session_repo.clone())),
        Arc::new(UpdateLogisticsHandler::new(session_repo.clone())),
        Arc::new(GetSessionHandler::new(session_repo.clone())),
        Arc::new(ListStudentSessionsHandler::new(session_repo.clone())),
        Arc::new(ListTutorSessionsHandler::new(session_repo.clone())),
        Arc::new(ListAllSessionsHandler::new(session_repo.clone())),
    );

    // Evaluation handlers
    let evaluations = EvaluationHandlers::new(
        Arc::new(SubmitEvaluationHandler::new(
            evaluation_repo.clone(),
            session_repo,
            clock,
            locks,
        )),
        Arc::new(GetEvaluationHandler::new(evaluation_repo.clone())),
        Arc::new(ListSessionEvaluationsHandler::new(evaluation_repo.clone())),
        Arc::new(ListStudentEvaluationsHandler::new(evaluation_repo)),
    );

    let app = api_router(availability, matching, sessions, evaluations).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(CorsLayer::permissive()),
    );

    let addr = config.server.socket_addr();
    info!("tutorlink listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
