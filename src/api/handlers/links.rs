//! Handlers for the shortener endpoints.

use axum::{
    Json,
    extract::{OriginalUri, Path, State, rejection::JsonRejection},
    response::{IntoResponse, Redirect, Response},
};

use crate::api::dto::{LinkRequest, LinkResponse, validate_link_request};
use crate::error::{ApiError, AppError};
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/v1/shortener`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "customKey": "my-key"   // optional
/// }
/// ```
///
/// A blank or absent `customKey` routes to the generated-key path.
///
/// # Errors
///
/// - 400 if the payload is malformed, fails field validation, or the URL
///   fails the liveness check
/// - 409 if the custom key is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, ApiError> {
    let instance = uri.path().to_string();

    let Json(request) = payload
        .map_err(|rejection| AppError::validation(vec![rejection.body_text()]).at(instance.as_str()))?;

    let errors = validate_link_request(&request);
    if !errors.is_empty() {
        let messages = errors.into_iter().map(|e| e.message).collect();
        return Err(AppError::validation(messages).at(instance));
    }

    let result = match request.custom_key() {
        Some(key) => state.link_service.create_with_key(&request.url, key).await,
        None => state.link_service.create(&request.url).await,
    };

    let link = result.map_err(|e| e.at(instance))?;
    Ok(Json(LinkResponse::from(link)))
}

/// Resolves a short key: redirect, or link info for a `+`-suffixed key.
///
/// # Endpoints
///
/// - `GET /api/v1/shortener/{key}` - 307 redirect to the stored URL
/// - `GET /api/v1/shortener/{key}+` - 200 with the link's JSON body
///
/// The `+` suffix is part of the captured path segment (the route table
/// cannot match on suffixes), so it is stripped here.
///
/// # Errors
///
/// Returns 404 if the key does not exist.
pub async fn resolve_link_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    let instance = uri.path().to_string();

    if let Some(key) = key.strip_suffix('+') {
        let link = state
            .link_service
            .get_by_key(key)
            .await
            .map_err(|e| e.at(instance))?;

        Ok(Json(LinkResponse::from(link)).into_response())
    } else {
        let link = state
            .link_service
            .get_by_key(&key)
            .await
            .map_err(|e| e.at(instance))?;

        Ok(Redirect::temporary(&link.url).into_response())
    }
}
