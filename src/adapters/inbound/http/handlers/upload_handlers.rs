use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    adapters::inbound::http::{
        dto::{ErrorResponseDto, RetrievalUrlDto, SuccessResponseDto, UploadResponseDto},
        router::AppState,
    },
    domain::{
        errors::FileProviderError,
        models::{FileDeleteRequest, FileUpload},
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);

fn provider_error(err: FileProviderError) -> ErrorResponse {
    (
        StatusCode::from(&err),
        Json(ErrorResponseDto::from_provider_error(&err)),
    )
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseDto::bad_request(&message)),
    )
}

/// Handle multipart upload. Every file part is uploaded in order; text
/// fields are ignored.
pub async fn upload_files(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponseDto>), ErrorResponse> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| bad_request(format!("Failed to read '{}': {}", filename, e)))?;

        let upload = FileUpload::builder()
            .filename(filename)
            .mime_type(mime_type)
            .content(content)
            .build();

        let stored = app_state
            .file_provider
            .upload(upload)
            .await
            .map_err(provider_error)?;
        files.push(stored);
    }

    if files.is_empty() {
        return Err(bad_request("No files in request".to_string()));
    }

    Ok((StatusCode::CREATED, Json(UploadResponseDto { files })))
}

/// Handle deletion of one file or a batch
pub async fn delete_files(
    State(app_state): State<AppState>,
    Json(request): Json<FileDeleteRequest>,
) -> Result<Json<SuccessResponseDto>, ErrorResponse> {
    app_state
        .file_provider
        .delete(request)
        .await
        .map_err(provider_error)?;

    Ok(Json(SuccessResponseDto::new("Files deleted successfully")))
}

/// Handle retrieval URL lookup
pub async fn get_file_url(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Json<RetrievalUrlDto> {
    let url = app_state.file_provider.get_presigned_download_url(&key);
    Json(RetrievalUrlDto { key, url })
}
