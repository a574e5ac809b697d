// ==================== FILE RECEIVER ====================
// Recebe o upload multipart opcional e persiste no diretório scratch.
// Nome do arquivo: timestamp em milissegundos + extensão original.

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::Utc;
use std::path::Path;

use crate::models::NO_IMAGE;
use crate::utils::AppError;

/// Multipart payload shared by the create and update routes.
///
/// Every field is optional: absent text fields are stored as null and an
/// absent file resolves to the `"none"` sentinel.
#[derive(Debug, MultipartForm)]
pub struct UserForm {
    pub name: Option<Text<String>>,
    pub age: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub phone: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

/// Resolves the `image` field for a request: persists the upload when one was
/// sent, otherwise substitutes the sentinel. Same rule for create and update.
pub async fn resolve_image(
    upload_dir: &str,
    file: Option<&TempFile>,
) -> Result<String, AppError> {
    match file {
        Some(file) => store_upload(upload_dir, file).await,
        None => Ok(NO_IMAGE.to_string()),
    }
}

/// Copies the spooled upload into the scratch directory and returns its path.
///
/// Paths are always built with forward slashes. Nothing is ever evicted from
/// the scratch directory, and same-millisecond uploads can collide on the
/// generated name.
pub async fn store_upload(upload_dir: &str, file: &TempFile) -> Result<String, AppError> {
    tokio::fs::create_dir_all(upload_dir).await?;

    let filename = scratch_filename(file.file_name.as_deref());
    let dest = format!("{}/{}", upload_dir.trim_end_matches('/'), filename);

    tokio::fs::copy(file.file.path(), &dest).await?;

    log::info!("📁 Stored upload: {} ({} bytes)", dest, file.size);

    Ok(dest)
}

/// Unique-enough filename: current timestamp plus the original extension.
fn scratch_filename(original_name: Option<&str>) -> String {
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!("{}{}", Utc::now().timestamp_millis(), ext)
}
