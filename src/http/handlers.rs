//! Calculator endpoint handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::calculator::{
    calculate_box_properties, calculate_material_cost, BoxCalculationResult, BoxDimensions,
    BoxDimensionsRequest, CalculatorInfo, MaterialCatalog, MaterialCostRequest,
    MaterialCostResult, ValidationError,
};
use crate::http::response::{ApiError, ApiResponse, ErrorContext, HealthStatus};
use crate::http::server::AppState;
use crate::observability::metrics::{record_calculation, Outcome};

/// Body of the root endpoint.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: state.config.app.name.clone(),
        version: state.config.app.version.clone(),
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

fn rejected(calculator: &'static str, context: ErrorContext, error: &ValidationError) -> ApiError {
    warn!(calculator, error = %error, "Calculation rejected");
    record_calculation(calculator, Outcome::Rejected);
    ApiError::validation(context, error)
}

fn unreadable(calculator: &'static str, context: ErrorContext, rejection: JsonRejection) -> ApiError {
    warn!(calculator, error = %rejection.body_text(), "Unreadable request body");
    record_calculation(calculator, Outcome::Rejected);
    ApiError::rejection(context, rejection)
}

/// `POST /box-calculator`
pub async fn calculate_box(
    payload: Result<Json<BoxDimensionsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BoxCalculationResult>>, ApiError> {
    let context = ErrorContext::Calculation;
    let Json(request) = payload.map_err(|r| unreadable("box", context, r))?;
    let dimensions =
        BoxDimensions::try_from(request).map_err(|e| rejected("box", context, &e))?;

    let result = calculate_box_properties(&dimensions);
    record_calculation("box", Outcome::Success);

    Ok(Json(ApiResponse::ok(result)))
}

/// `POST /material-cost`
pub async fn material_cost(
    payload: Result<Json<MaterialCostRequest>, JsonRejection>,
) -> Result<Json<MaterialCostResult>, ApiError> {
    let context = ErrorContext::CostCalculation;
    let Json(request) = payload.map_err(|r| unreadable("material_cost", context, r))?;

    let surface_area = request.surface_area.ok_or_else(|| {
        rejected(
            "material_cost",
            context,
            &ValidationError::Missing {
                field: "surface_area",
            },
        )
    })?;
    let result = calculate_material_cost(surface_area, &request.material)
        .map_err(|e| rejected("material_cost", context, &e))?;
    record_calculation("material_cost", Outcome::Success);

    Ok(Json(result))
}

/// `GET /materials`
pub async fn materials() -> Json<ApiResponse<MaterialCatalog>> {
    Json(ApiResponse::ok(MaterialCatalog))
}

/// `GET /calculator-info`
pub async fn calculator_info() -> Json<ApiResponse<CalculatorInfo>> {
    Json(ApiResponse::ok(CalculatorInfo::new()))
}
