//! Request path → file → HTTP response.

use std::io;
use std::path::{Component, Path, PathBuf};

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error, warn};

/// Content type inferred from the file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "text/plain",
    }
}

/// Map a request path onto a file under `root`.
///
/// `/` maps to `index.html`. Returns `None` for paths with `..`, root or
/// prefix components so nothing outside `root` can be named.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    if request_path == "/" || request_path.is_empty() {
        return Some(root.join("index.html"));
    }

    let relative = Path::new(request_path.trim_start_matches('/'));
    let mut out = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(out)
}

/// Read the file for `request_path` and build the response.
///
/// 200 with the file bytes, 404 when it does not exist, 500 for any other
/// read failure.
pub async fn respond(root: &Path, request_path: &str) -> Response {
    let Some(path) = resolve(root, request_path) else {
        warn!(request_path, "rejected path outside root");
        return not_found(request_path);
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            debug!(path = %path.display(), len = bytes.len(), "served");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type_for(&path))],
                bytes,
            )
                .into_response()
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "file not found");
            not_found(request_path)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "read failed");
            server_error(&e)
        }
    }
}

fn not_found(request_path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("File not found: {}", request_path),
    )
        .into_response()
}

fn server_error(err: &io::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("Server Error: {:?}", err.kind()),
    )
        .into_response()
}
