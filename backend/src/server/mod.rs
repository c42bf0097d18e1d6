//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use std::future::Future;

use actix_cors::Cors;
use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, HttpServer, web};

use clientes_api::Trace;
#[cfg(debug_assertions)]
use clientes_api::doc::ApiDoc;
use clientes_api::inbound::http::clientes;
use clientes_api::inbound::http::health::{HealthState, live, ready};
use clientes_api::inbound::http::state::HttpState;
use clientes_api::middleware::trace::TRACE_ID_HEADER;
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    allowed_origin: String,
}

fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(["GET", "POST", "PUT", "DELETE"])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([TRACE_ID_HEADER])
        .max_age(3600)
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        allowed_origin,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors(&allowed_origin))
        .wrap(Trace)
        .service(web::scope("/api").configure(clientes::configure))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server for `config` and mark it ready.
///
/// Signal handling is left to [`drain_on`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        allowed_origin,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            allowed_origin: allowed_origin.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM.
///
/// A handler that cannot be installed never resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Once `signal` resolves, fail liveness probes and stop the server
/// gracefully.
pub async fn drain_on(
    signal: impl Future<Output = ()>,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
) {
    signal.await;
    info!("shutdown requested, draining connections");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::{fixture, rstest};

    const ORIGIN: &str = "http://localhost:4200";

    #[fixture]
    fn deps() -> AppDependencies {
        let config = ServerConfig::new(([127, 0, 0, 1], 0).into(), ORIGIN);
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: build_http_state(&config),
            allowed_origin: config.allowed_origin,
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn api_scope_serves_clientes_with_cors_and_trace_headers(deps: AppDependencies) {
        let app = actix_test::init_service(build_app(deps)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/clientes")
            .insert_header((header::ORIGIN, ORIGIN))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some(ORIGIN)
        );
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[rstest]
    #[actix_web::test]
    async fn preflight_allows_configured_origin(deps: AppDependencies) {
        let app = actix_test::init_service(build_app(deps)).await;

        let request = actix_test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/clientes/1")
            .insert_header((header::ORIGIN, ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let methods = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(methods.contains("PUT"), "allowed methods: {methods}");
    }

    #[rstest]
    #[actix_web::test]
    async fn health_probes_are_mounted_at_the_root(deps: AppDependencies) {
        deps.health_state.mark_ready();
        let app = actix_test::init_service(build_app(deps)).await;

        for uri in ["/health/ready", "/health/live"] {
            let request = actix_test::TestRequest::get().uri(uri).to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health_state = web::Data::new(HealthState::new());
        let config = ServerConfig::new(([127, 0, 0, 1], 0).into(), ORIGIN);
        let server = create_server(health_state.clone(), config).expect("bind ephemeral port");
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        assert!(health_state.is_alive());

        drain_on(std::future::ready(()), health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }

    #[rstest]
    fn config_reports_storage_choice() {
        let config = ServerConfig::new(([0, 0, 0, 0], 8080).into(), ORIGIN);
        assert!(!config.uses_database());
        assert_eq!(config.bind_addr().port(), 8080);
    }
}
