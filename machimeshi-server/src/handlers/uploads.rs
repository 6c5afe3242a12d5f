//! Image upload handlers for menu and shop pictures.
//!
//! Files are stored under a random UUID name so a hostile filename never
//! reaches the filesystem; the original name only contributes its extension.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Multipart, Path, State},
    http::StatusCode,
};
use tracing::{info, instrument};
use uuid::Uuid;

use shared::models::{ErrorResponse, MessageResponse, UploadResponse};

use crate::{
    app_state::AppState,
    http::error::{ApiError, AppResult},
    middleware::request_context::RequestContext,
};

/// Accepted image extensions, lowercase.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Store an uploaded image and answer with its public URL.
#[utoipa::path(
    post,
    path = "/api/upload/image",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing file or unsupported image type", body = ErrorResponse),
        (status = 413, description = "Image exceeds the size cap", body = ErrorResponse)
    ),
    tag = "Uploads"
)]
#[instrument(skip_all)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    context.require_account()?;

    let mut stored: Option<(String, usize)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let extension = allowed_extension(&original_name).ok_or_else(|| {
            metrics::counter!("uploads_total", "status" => "rejected").increment(1);
            ApiError::bad_request(
                "unsupported image type: use .jpg, .jpeg, .png, .gif, or .webp",
            )
        })?;

        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::bad_request(err.to_string()))?;
        if data.len() as u64 > state.uploads.max_bytes {
            metrics::counter!("uploads_total", "status" => "rejected").increment(1);
            return Err(ApiError::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                "too_large",
                format!("image exceeds {} bytes", state.uploads.max_bytes),
            ));
        }

        let filename = format!("{}.{extension}", Uuid::new_v4());
        tokio::fs::create_dir_all(&state.uploads.dir).await?;
        tokio::fs::write(state.uploads.dir.join(&filename), &data).await?;
        stored = Some((filename, data.len()));
        break;
    }

    let Some((filename, size)) = stored else {
        return Err(ApiError::bad_request("missing file field"));
    };

    info!(filename = %filename, size, "stored uploaded image");
    metrics::counter!("uploads_total", "status" => "ok").increment(1);

    let url = format!(
        "{}/{filename}",
        state.uploads.public_base.trim_end_matches('/')
    );
    Ok(Json(UploadResponse {
        success: true,
        message: "Image uploaded".to_string(),
        url,
        filename,
    }))
}

/// Remove a previously uploaded image.
#[utoipa::path(
    delete,
    path = "/api/upload/image/{filename}",
    params(("filename" = String, Path, description = "Filename returned by the upload endpoint")),
    responses(
        (status = 200, description = "Image removed", body = MessageResponse),
        (status = 400, description = "Malformed filename", body = ErrorResponse),
        (status = 404, description = "No such image", body = ErrorResponse)
    ),
    tag = "Uploads"
)]
#[instrument(skip(state, context))]
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<RequestContext>,
    Path(filename): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    context.require_account()?;

    if !is_safe_filename(&filename) {
        return Err(ApiError::bad_request("malformed filename"));
    }

    tokio::fs::remove_file(state.uploads.dir.join(&filename)).await?;
    info!(filename = %filename, "removed uploaded image");
    Ok(Json(MessageResponse::new("Image deleted")))
}

/// The lowercase extension of `name`, when it is on the whitelist.
fn allowed_extension(name: &str) -> Option<String> {
    let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// A filename is safe when it stays inside the upload directory.
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the extension whitelist
    #[test]
    fn test_allowed_extension() {
        assert_eq!(allowed_extension("photo.JPG"), Some("jpg".to_string()));
        assert_eq!(allowed_extension("menu.webp"), Some("webp".to_string()));
        assert_eq!(allowed_extension("a.b.png"), Some("png".to_string()));
        assert_eq!(allowed_extension("script.svg"), None);
        assert_eq!(allowed_extension("noextension"), None);
        assert_eq!(allowed_extension(""), None);
    }

    /// Test path traversal is rejected
    #[test]
    fn test_is_safe_filename() {
        assert!(is_safe_filename("0b7e3a.png"));
        assert!(!is_safe_filename("../etc/passwd"));
        assert!(!is_safe_filename("a/../b.png"));
        assert!(!is_safe_filename("dir/file.png"));
        assert!(!is_safe_filename("dir\\file.png"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename(".."));
    }
}
