//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;
use pixvault_core::models;
use pixvault_infra::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pixvault Storage API",
        version = "0.1.0",
        description = "Image upload backend: admission caps, PNG signature sniffing, persistence under collision-resistant names, gallery listing and delete."
    ),
    paths(
        handlers::upload::upload_images,
        handlers::gallery::list_images,
        handlers::gallery::delete_image,
        handlers::health::health_check,
    ),
    components(schemas(
        models::UploadResponse,
        models::StoredFile,
        models::GalleryResponse,
        models::GalleryEntry,
        models::DeleteResponse,
        ErrorResponse,
    )),
    tags(
        (name = "upload", description = "Multipart image upload"),
        (name = "images", description = "Stored image listing and deletion"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
