//! API Handlers
//!
//! One handler per exposed plugin operation. Opaque resources relay straight
//! through; list resources go through the cache and an offset/count window.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::ListCache;
use crate::error::Result;
use crate::models::{
    ClassPageQuery, ClassQuery, HealthResponse, MethodLookupQuery, MethodSearchQuery, PageQuery,
    ResourceQuery,
};
use crate::relay::{parse, UpstreamClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared list cache
    pub cache: Arc<RwLock<ListCache>>,
    /// Client for the JADX-AI plugin
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Creates a new AppState from its two collaborators.
    pub fn new(cache: ListCache, upstream: UpstreamClient) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            upstream,
        }
    }
}

/// Serves a list resource through the cache.
///
/// Cache first; on a miss relay once, parse the body into a list, populate
/// the cache, and hand the full list back for slicing. The lock is released
/// before the upstream await, so a concurrent miss on the same key may relay
/// too — last writer wins over identical data.
async fn list_via_cache(
    state: &AppState,
    key: String,
    resource: &str,
    params: &[(&str, &str)],
    parse: fn(&str) -> Vec<String>,
) -> Result<Vec<String>> {
    if let Some(items) = state.cache.write().await.get(&key) {
        return Ok(items);
    }

    let raw = state.upstream.fetch(resource, params).await?;
    let items = parse(&raw);
    state.cache.write().await.set(key, items.clone());
    Ok(items)
}

// == Opaque pass-through handlers ==

/// Handler for GET /fetch_current_class
pub async fn fetch_current_class(State(state): State<AppState>) -> Result<Json<String>> {
    Ok(Json(state.upstream.fetch("current-class", &[]).await?))
}

/// Handler for GET /get_selected_text
pub async fn get_selected_text(State(state): State<AppState>) -> Result<Json<String>> {
    Ok(Json(state.upstream.fetch("selected-text", &[]).await?))
}

/// Handler for GET /get_method_by_name
pub async fn get_method_by_name(
    State(state): State<AppState>,
    Query(query): Query<MethodLookupQuery>,
) -> Result<Json<String>> {
    let params = [
        ("class", query.class_name.as_str()),
        ("method", query.method_name.as_str()),
    ];
    Ok(Json(state.upstream.fetch("method-by-name", &params).await?))
}

/// Handler for GET /get_class_source
pub async fn get_class_source(
    State(state): State<AppState>,
    Query(query): Query<ClassQuery>,
) -> Result<Json<String>> {
    let params = [("class", query.class_name.as_str())];
    Ok(Json(state.upstream.fetch("class-source", &params).await?))
}

/// Handler for GET /get_smali_of_class
pub async fn get_smali_of_class(
    State(state): State<AppState>,
    Query(query): Query<ClassQuery>,
) -> Result<Json<String>> {
    let params = [("class", query.class_name.as_str())];
    Ok(Json(state.upstream.fetch("smali-of-class", &params).await?))
}

/// Handler for GET /get_android_manifest
pub async fn get_android_manifest(State(state): State<AppState>) -> Result<Json<String>> {
    Ok(Json(state.upstream.fetch("manifest", &[]).await?))
}

/// Handler for GET /get_strings
pub async fn get_strings(State(state): State<AppState>) -> Result<Json<String>> {
    Ok(Json(state.upstream.fetch("strings", &[]).await?))
}

/// Handler for GET /get_all_resource_file_names
pub async fn get_all_resource_file_names(State(state): State<AppState>) -> Result<Json<String>> {
    Ok(Json(
        state
            .upstream
            .fetch("list-all-resource-files-names", &[])
            .await?,
    ))
}

/// Handler for GET /get_resource_file
pub async fn get_resource_file(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> Result<Json<String>> {
    let params = [("name", query.resource_name.as_str())];
    Ok(Json(state.upstream.fetch("get-resource-file", &params).await?))
}

/// Handler for GET /get_main_activity_class
pub async fn get_main_activity_class(State(state): State<AppState>) -> Result<Json<String>> {
    Ok(Json(state.upstream.fetch("main-activity", &[]).await?))
}

// == Cached, paginated handlers ==

/// Handler for GET /get_all_classes
pub async fn get_all_classes(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<String>>> {
    let classes = list_via_cache(
        &state,
        "all_classes".to_string(),
        "all-classes",
        &[],
        parse::class_list,
    )
    .await?;

    Ok(Json(page.slice(&classes).to_vec()))
}

/// Handler for GET /search_method_by_name
pub async fn search_method_by_name(
    State(state): State<AppState>,
    Query(query): Query<MethodSearchQuery>,
) -> Result<Json<Vec<String>>> {
    let key = format!("search_method_{}", query.method_name);
    let params = [("method", query.method_name.as_str())];
    let matches = list_via_cache(&state, key, "search-method", &params, parse::lines).await?;

    Ok(Json(query.page().slice(&matches).to_vec()))
}

/// Handler for GET /get_methods_of_class
pub async fn get_methods_of_class(
    State(state): State<AppState>,
    Query(query): Query<ClassPageQuery>,
) -> Result<Json<Vec<String>>> {
    let key = format!("methods_of_class_{}", query.class_name);
    let params = [("class", query.class_name.as_str())];
    let methods = list_via_cache(&state, key, "methods-of-class", &params, parse::lines).await?;

    Ok(Json(query.page().slice(&methods).to_vec()))
}

/// Handler for GET /get_fields_of_class
pub async fn get_fields_of_class(
    State(state): State<AppState>,
    Query(query): Query<ClassPageQuery>,
) -> Result<Json<Vec<String>>> {
    let key = format!("fields_of_class_{}", query.class_name);
    let params = [("class", query.class_name.as_str())];
    let fields = list_via_cache(&state, key, "fields-of-class", &params, parse::lines).await?;

    Ok(Json(query.page().slice(&fields).to_vec()))
}

/// Handler for GET /get_main_application_classes_names
pub async fn get_main_application_classes_names(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<String>>> {
    let names = list_via_cache(
        &state,
        "main_app_cls_names".to_string(),
        "main-application-classes-names",
        &[],
        parse::main_class_names,
    )
    .await?;

    Ok(Json(page.slice(&names).to_vec()))
}

/// Handler for GET /get_main_application_classes_code
pub async fn get_main_application_classes_code(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<String>>> {
    let sources = list_via_cache(
        &state,
        "main_app_cls_code".to_string(),
        "main-application-classes-code",
        &[],
        parse::main_class_code,
    )
    .await?;

    Ok(Json(page.slice(&sources).to_vec()))
}

// == Health ==

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CACHE_EXPIRY_SECS;
    use crate::error::ProxyError;

    /// State whose upstream points at a dead port; any relay attempt fails.
    async fn state_with_dead_upstream() -> AppState {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        AppState::new(
            ListCache::new(CACHE_EXPIRY_SECS),
            UpstreamClient::new(format!("http://{}", addr)),
        )
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_cached_list_is_served_without_relaying() {
        // The upstream is unreachable, so a response can only come from the
        // cache consulted first.
        let state = state_with_dead_upstream().await;
        let classes: Vec<String> = (0..10).map(|i| format!("com.app.C{}", i)).collect();
        state
            .cache
            .write()
            .await
            .set("all_classes".to_string(), classes);

        let result = get_all_classes(
            State(state),
            Query(PageQuery { offset: 5, count: 0 }),
        )
        .await;

        let Json(sliced) = result.expect("cache hit should not touch the upstream");
        assert_eq!(sliced.len(), 5);
        assert_eq!(sliced[0], "com.app.C5");
        assert_eq!(sliced[4], "com.app.C9");
    }

    #[tokio::test]
    async fn test_cache_miss_with_dead_upstream_is_unavailable() {
        let state = state_with_dead_upstream().await;

        let result = get_all_classes(
            State(state),
            Query(PageQuery { offset: 0, count: 0 }),
        )
        .await;

        assert!(matches!(result, Err(ProxyError::RemoteUnavailable(_))));
    }

    #[tokio::test]
    async fn test_search_cache_is_keyed_per_method_name() {
        let state = state_with_dead_upstream().await;
        state
            .cache
            .write()
            .await
            .set("search_method_onCreate".to_string(), vec!["hit".to_string()]);

        // The seeded method name is served from cache
        let ok = search_method_by_name(
            State(state.clone()),
            Query(MethodSearchQuery {
                method_name: "onCreate".to_string(),
                offset: 0,
                count: 0,
            }),
        )
        .await;
        let Json(matches) = ok.unwrap();
        assert_eq!(matches, vec!["hit"]);

        // A different method name misses and has to relay
        let err = search_method_by_name(
            State(state),
            Query(MethodSearchQuery {
                method_name: "onDestroy".to_string(),
                offset: 0,
                count: 0,
            }),
        )
        .await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn test_opaque_endpoint_does_not_consult_cache() {
        let state = state_with_dead_upstream().await;
        // Even with a populated cache, an opaque endpoint always relays.
        state
            .cache
            .write()
            .await
            .set("all_classes".to_string(), vec!["x".to_string()]);

        let result = fetch_current_class(State(state)).await;
        assert!(matches!(result, Err(ProxyError::RemoteUnavailable(_))));
    }
}
