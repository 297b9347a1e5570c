use axum::Json;

use crate::api::response::ApiResponse;
use crate::catalog::{CatalogEntry, CATALOG};

/// GET /api/v1/catalog - list the preset appliances the quick estimate accepts
pub async fn get_catalog() -> Json<ApiResponse<&'static [CatalogEntry]>> {
    Json(ApiResponse::success(CATALOG))
}
