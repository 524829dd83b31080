//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    fetch_current_class, get_all_classes, get_all_resource_file_names, get_android_manifest,
    get_class_source, get_fields_of_class, get_main_activity_class,
    get_main_application_classes_code, get_main_application_classes_names, get_method_by_name,
    get_methods_of_class, get_resource_file, get_selected_text, get_smali_of_class, get_strings,
    health_handler, search_method_by_name, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// Every route is a GET mirroring one plugin resource; `/health` is the lone
/// local endpoint and stays out of any published interface description.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/fetch_current_class", get(fetch_current_class))
        .route("/get_selected_text", get(get_selected_text))
        .route("/get_method_by_name", get(get_method_by_name))
        .route("/get_all_classes", get(get_all_classes))
        .route("/get_class_source", get(get_class_source))
        .route("/search_method_by_name", get(search_method_by_name))
        .route("/get_methods_of_class", get(get_methods_of_class))
        .route("/get_fields_of_class", get(get_fields_of_class))
        .route("/get_smali_of_class", get(get_smali_of_class))
        .route("/get_android_manifest", get(get_android_manifest))
        .route("/get_strings", get(get_strings))
        .route(
            "/get_all_resource_file_names",
            get(get_all_resource_file_names),
        )
        .route("/get_resource_file", get(get_resource_file))
        .route(
            "/get_main_application_classes_names",
            get(get_main_application_classes_names),
        )
        .route(
            "/get_main_application_classes_code",
            get(get_main_application_classes_code),
        )
        .route("/get_main_activity_class", get(get_main_activity_class))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
