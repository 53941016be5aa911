//! Image Upload Handler
//!
//! Handles banner/menu-item image uploads from the back office.
//! Supports multiple image formats (PNG, JPEG, WebP) and converts to JPG.
//! Files are named by content hash, so re-uploading the same image is a
//! no-op that returns the existing URL.

use std::io::Cursor;
use std::path::PathBuf;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use image::codecs::jpeg::JpegEncoder;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality for dish images (85% keeps color appeal at a sane size)
const JPEG_QUALITY: u8 = 85;

/// Upload response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub filename: String,
    pub original_name: String,
    pub size: usize,
    pub format: String,
    pub url: String,
}

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Re-encode the image as RGB JPEG
fn process_and_compress_image(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("Invalid image data: {e}")))?;

    // JPEG has no alpha channel
    let rgb = image::DynamicImage::ImageRgb8(img.to_rgb8());

    let mut compressed = Vec::new();
    let mut cursor = Cursor::new(&mut compressed);
    let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| AppError::internal(format!("Image encoding failed: {e}")))?;

    Ok(compressed)
}

/// POST /api/admin/upload - 上传图片
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let extension = PathBuf::from(&original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !SUPPORTED_FORMATS.contains(&extension.as_str()) {
            return Err(AppError::validation(format!(
                "Unsupported image format '{}' (expected one of {})",
                extension,
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        let data = field.bytes().await?;
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "File too large ({} bytes, max {})",
                data.len(),
                MAX_FILE_SIZE
            )));
        }

        let compressed = process_and_compress_image(&data)?;
        let hash = calculate_hash(&compressed);
        let filename = format!("{}.jpg", &hash[..32]);
        let target = state.images_dir().join(&filename);

        // Same content hash means the file is already on disk
        if !target.exists() {
            tokio::fs::write(&target, &compressed)
                .await
                .map_err(|e| AppError::internal(format!("Failed to store image: {e}")))?;
        }

        let size = compressed.len();
        tracing::info!(%filename, original = %original_name, size, "Image uploaded");

        return Ok(Json(UploadResponse {
            url: format!("/uploads/{filename}"),
            filename,
            original_name,
            size,
            format: "jpg".to_string(),
        }));
    }

    Err(AppError::validation("Missing 'file' field in upload"))
}

/// GET /uploads/:filename - 提供上传的图片
pub async fn serve(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    // Uploads are flat files; any path structure is an attack
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(AppError::validation("Invalid filename"));
    }

    let path = state.images_dir().join(&filename);
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found(format!("Image {} not found", filename)))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], data).into_response())
}
