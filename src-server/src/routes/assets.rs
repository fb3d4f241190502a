//! Static frontend files
//!
//! Everything outside `/api` is served from the static directory (the
//! built frontend bundle). Unknown `/api` paths get a JSON 404.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use tracing::{debug, warn};

use super::error::ApiError;
use crate::AppState;

pub async fn serve_static(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return ApiError::not_found().into_response();
    }
    if method != Method::GET && method != Method::HEAD {
        return ApiError::not_found().into_response();
    }

    let Some(mut file) = resolve(&state.static_dir, path) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if tokio::fs::metadata(&file).await.map(|meta| meta.is_dir()).unwrap_or(false) {
        file.push("index.html");
    }

    match tokio::fs::read(&file).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&file).first_or_octet_stream();
            debug!(path = %file.display(), "static file");
            ([(header::CONTENT_TYPE, mime_type.to_string())], content).into_response()
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            warn!(path = %file.display(), error = %err, "failed to read static file");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Map a URL path onto the static dir. `None` for anything escaping it.
fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(url_path).decode_utf8().ok()?;
    let relative = decoded.trim_start_matches('/');
    if relative.is_empty() {
        return Some(root.join("index.html"));
    }
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_is_index() {
        assert_eq!(resolve(Path::new("dist"), "/"), Some(PathBuf::from("dist/index.html")));
    }

    #[test]
    fn test_resolve_nested_file() {
        assert_eq!(
            resolve(Path::new("dist"), "/assets/garden%20plan.css"),
            Some(PathBuf::from("dist/assets/garden plan.css"))
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        assert_eq!(resolve(Path::new("dist"), "/../secret.db"), None);
        assert_eq!(resolve(Path::new("dist"), "/assets/%2e%2e/%2e%2e/secret.db"), None);
    }
}
