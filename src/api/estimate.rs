use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::{error::ApiError, response::ApiResponse, AppState},
    catalog,
    domain::ApplianceLoad,
    sizing::{estimate_system, SystemEstimate},
};

/// Detailed estimate request: the full appliance selection.
#[derive(Debug, Deserialize, Validate)]
pub struct EstimateRequest {
    #[validate(nested)]
    pub appliances: Vec<ApplianceRequest>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ApplianceRequest {
    #[validate(length(min = 1, message = "appliance name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "rated power must be non-negative"))]
    pub watts_each: f64,
    pub unit_count: u32,
    #[validate(range(min = 0.0, max = 24.0, message = "daily hours must be within 0-24"))]
    pub hours_per_day: f64,
}

impl From<ApplianceRequest> for ApplianceLoad {
    fn from(request: ApplianceRequest) -> Self {
        ApplianceLoad::new(
            request.name,
            request.watts_each,
            request.unit_count,
            request.hours_per_day,
        )
    }
}

/// Quick estimate request: catalog item names and counts. Wattage and daily
/// hours come from the preset catalog.
#[derive(Debug, Deserialize, Validate)]
pub struct QuickEstimateRequest {
    #[validate(nested)]
    pub items: Vec<QuickItem>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuickItem {
    #[validate(length(min = 1, message = "item name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: u32,
}

/// POST /api/v1/estimate - size a system for an explicit appliance selection
pub async fn estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<ApiResponse<SystemEstimate>>, ApiError> {
    request.validate()?;

    let loads: Vec<ApplianceLoad> = request.appliances.into_iter().map(Into::into).collect();
    let estimate = estimate_system(&loads, &state.config.estimator)?;

    tracing::info!(
        appliances = loads.len(),
        daily_energy_kwh = estimate.profile.daily_energy_kwh,
        panel_count = estimate.sizing.panel_count,
        "estimate computed"
    );

    Ok(Json(ApiResponse::success(estimate)))
}

/// POST /api/v1/estimate/quick - size a system from catalog presets
pub async fn quick_estimate(
    State(state): State<AppState>,
    Json(request): Json<QuickEstimateRequest>,
) -> Result<Json<ApiResponse<SystemEstimate>>, ApiError> {
    request.validate()?;

    let mut loads = Vec::with_capacity(request.items.len());
    for item in &request.items {
        let entry = catalog::find(&item.name).ok_or_else(|| {
            ApiError::BadRequest(format!("unknown appliance '{}'", item.name))
        })?;
        loads.push(entry.to_load(item.count));
    }

    let estimate = estimate_system(&loads, &state.config.estimator)?;

    tracing::info!(
        items = loads.len(),
        daily_energy_kwh = estimate.profile.daily_energy_kwh,
        "quick estimate computed"
    );

    Ok(Json(ApiResponse::success(estimate)))
}
