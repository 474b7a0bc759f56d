use std::any::Any;

use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{
    create_course, delete_course, get_course, health, list_courses, list_students,
    route_not_found, student_courses, student_info, update_course,
};
use crate::state::AppState;

/// Turns a handler panic into the generic 500 envelope.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}

pub fn app_router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(cors::Any);

    Router::new()
        .route("/", get(student_info))
        .route("/health", get(health))
        .route("/students", get(list_students))
        .route("/students/:student_id/courses", get(student_courses))
        .route(
            "/courses",
            get(list_courses)
                .post(create_course)
                .put(update_course)
                .delete(delete_course),
        )
        .route("/courses/:course_id", get(get_course))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(cors_layer),
        )
        .with_state(state)
}
