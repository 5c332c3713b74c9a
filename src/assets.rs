use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use mime_guess::MimeGuess;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

use crate::AppState;

/// Files served from the site root outside of `/pkg`.
pub const ASSET_ROUTES: &[&str] = &["/logo.svg"];

pub fn create_asset_routes() -> Router<AppState> {
    ASSET_ROUTES
        .iter()
        .fold(Router::new(), |router, route| router.route(route, get(serve_asset)))
}

pub async fn serve_asset(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response<Body>, StatusCode> {
    let name = request.uri().path().trim_start_matches('/');

    if !is_valid_asset_name(name) {
        warn!("Rejected asset path: {}", request.uri().path());
        return Err(StatusCode::BAD_REQUEST);
    }

    let file_path = Path::new(&state.site_root).join(name);
    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Asset not found: {}", file_path.display());
            return Err(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            error!("Failed to read asset {}: {}", file_path.display(), e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let mime_type = MimeGuess::from_path(name).first_or_octet_stream().to_string();
    info!("Serving asset: {} ({} bytes, MIME: {})", name, content.len(), mime_type);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(
            header::CACHE_CONTROL,
            format!("public, max-age={}", state.cache_max_age),
        )
        .body(Body::from(content))
        .map_err(|e| {
            error!("Failed to build asset response for {}: {}", name, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// A single file name directly under the site root.
fn is_valid_asset_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains("..")
        && !name.contains(['/', '\\'])
        && !name.chars().any(|c| c.is_control())
}
