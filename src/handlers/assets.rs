use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::path::{Component, Path as FsPath, PathBuf};
use tracing::{debug, warn};

use crate::app::router::AppState;

pub async fn index(State(state): State<AppState>) -> Response {
    serve_file(&state.public_dir, "index.html").await
}

// Fallback for every path no API route claims.
pub async fn asset(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    serve_file(&state.public_dir, uri.path()).await
}

async fn serve_file(root: &FsPath, relative: &str) -> Response {
    let Some(path) = resolve(root, relative) else {
        warn!("Refusing asset path outside public dir: {}", relative);
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            debug!("Serving {}", path.display());
            ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response()
        }
        Err(e) => {
            debug!("Asset {} not available: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Joins `relative` onto `root`, rejecting anything that could climb out of it.
fn resolve(root: &FsPath, relative: &str) -> Option<PathBuf> {
    let relative = FsPath::new(relative.trim_start_matches('/'));
    let mut resolved = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if resolved == root {
        return None;
    }
    Some(resolved)
}

fn content_type(path: &FsPath) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
