use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::delete_book::delete_book;
use super::handlers::list_books::list_books;
use super::handlers::login::login_user;
use super::handlers::register::register_user;
use super::handlers::update_book::update_book;
use super::middleware::authenticate as auth_middleware;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    book_service: Arc<dyn BookServicePort>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        user_service,
        book_service,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/api/users/register", post(register_user))
        .route("/api/users/login", post(login_user))
        .route("/api/books", get(list_books));

    let protected_routes = Router::new()
        .route("/api/books", post(create_book))
        .route("/api/books/:book_id", patch(update_book))
        .route("/api/books/:book_id", delete(delete_book))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
