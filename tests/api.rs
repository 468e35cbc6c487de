//! Router-level tests for the calculator API.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use engineering_suite::http::{build_router, X_REQUEST_ID};
use engineering_suite::SuiteConfig;
use serde_json::json;

mod common;

use common::{get, post_json, send, test_config};

fn router() -> Router {
    build_router(Arc::new(test_config()))
}

fn router_with(config: SuiteConfig) -> Router {
    build_router(Arc::new(config))
}

#[tokio::test]
async fn test_box_calculator_success() {
    let (status, _, body) = send(
        &router(),
        post_json(
            "/api/v1/box-calculator",
            r#"{"length": 10, "width": 5, "height": 2}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(
        data["dimensions"],
        json!({
            "length": 10.0, "width": 5.0, "height": 2.0,
            "length_ft": "0' 10.0\"", "width_ft": "0' 5.0\"", "height_ft": "0' 2.0\""
        })
    );
    assert_eq!(
        data["basic_calculations"],
        json!({
            "surface_area_sqin": 160.0,
            "surface_area_sqft": 1.11,
            "volume_cuin": 100.0,
            "volume_cuft": 0.06,
            "volume_liters": 1.64
        })
    );
    assert_eq!(data["geometry"], json!({"perimeter_base": 30.0, "diagonal": 11.36}));
    assert_eq!(data["practical"]["paint_needed_oz"], 0.5);
    assert_eq!(data["practical"]["cardboard_sheets"], 1.1);
    assert_eq!(
        data["practical"]["weight_estimates"],
        json!({"Cardboard": 1.0, "Wood": 3.0, "Steel": 28.0, "Plastic": 2.0})
    );
    assert_eq!(
        data["comparisons"],
        "About the size of a large water bottle or small shoebox."
    );
}

#[tokio::test]
async fn test_box_calculator_boundaries() {
    let router = router();

    let (status, _, _) = send(
        &router,
        post_json(
            "/api/v1/box-calculator",
            r#"{"length": 1000.0, "width": 1, "height": 1}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(
        &router,
        post_json(
            "/api/v1/box-calculator",
            r#"{"length": 1000.01, "width": 1, "height": 1}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["detail"],
        "Calculation error: length must be less than or equal to 1000 (got 1000.01)"
    );

    let (status, _, body) = send(
        &router,
        post_json(
            "/api/v1/box-calculator",
            r#"{"length": 0, "width": 1, "height": 1}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Calculation error: length must be greater than 0 (got 0)"
    );
}

#[tokio::test]
async fn test_error_body_carries_detail() {
    let router = router();

    let (status, _, body) = send(
        &router,
        post_json(
            "/api/v1/box-calculator",
            r#"{"length": 0, "width": 5, "height": 2}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Calculation error: length must be greater than 0 (got 0)",
            "detail": "Calculation error: length must be greater than 0 (got 0)",
        })
    );
}

#[tokio::test]
async fn test_box_calculator_bad_bodies() {
    let router = router();

    let (status, _, body) = send(
        &router,
        post_json("/api/v1/box-calculator", r#"{"length": 10, "width": 5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Calculation error: field required: height");

    let (status, _, body) = send(
        &router,
        post_json(
            "/api/v1/box-calculator",
            r#"{"length": "ten", "width": 5, "height": 2}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Calculation error: "));

    let (status, _, body) = send(&router, post_json("/api/v1/box-calculator", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_material_cost() {
    let router = router();

    let (status, _, body) = send(
        &router,
        post_json(
            "/api/v1/material-cost",
            r#"{"surface_area": 144, "material": "metal"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"material": "metal", "surface_area_sqft": 1.0, "estimated_cost": 5.0})
    );

    let (_, _, body) = send(
        &router,
        post_json(
            "/api/v1/material-cost",
            r#"{"surface_area": 144, "material": "titanium"}"#,
        ),
    )
    .await;
    assert_eq!(body["material"], "titanium");
    assert_eq!(body["estimated_cost"], 0.5);

    let (_, _, body) = send(
        &router,
        post_json("/api/v1/material-cost", r#"{"surface_area": 144}"#),
    )
    .await;
    assert_eq!(body["material"], "cardboard");
    assert_eq!(body["estimated_cost"], 0.5);
}

#[tokio::test]
async fn test_material_cost_case_insensitive() {
    let router = router();

    let (_, _, upper) = send(
        &router,
        post_json(
            "/api/v1/material-cost",
            r#"{"surface_area": 1000, "material": "Cardboard"}"#,
        ),
    )
    .await;
    let (_, _, lower) = send(
        &router,
        post_json(
            "/api/v1/material-cost",
            r#"{"surface_area": 1000, "material": "cardboard"}"#,
        ),
    )
    .await;

    assert_eq!(upper["estimated_cost"], lower["estimated_cost"]);
    assert_eq!(upper["material"], "Cardboard");
}

#[tokio::test]
async fn test_material_cost_rejections() {
    let router = router();

    let (status, _, body) = send(
        &router,
        post_json("/api/v1/material-cost", r#"{"surface_area": -5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Cost calculation error: surface_area must be greater than 0 (got -5)"
    );

    let (status, _, body) = send(
        &router,
        post_json("/api/v1/material-cost", r#"{"material": "metal"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Cost calculation error: field required: surface_area"
    );
}

#[tokio::test]
async fn test_materials_and_info() {
    let router = router();

    let (status, _, body) = send(&router, get("/api/v1/materials")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_object().unwrap().len(), 5);
    assert_eq!(
        body["data"]["metal"],
        "Metal sheets - heavy duty, industrial"
    );

    let (status, _, body) = send(&router, get("/api/v1/calculator-info")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["box_calculator"]["name"], "3D Box Calculator");
    assert_eq!(
        body["data"]["material_cost"]["materials"],
        json!(["cardboard", "plywood", "plastic", "metal", "acrylic"])
    );
}

#[tokio::test]
async fn test_health_and_root() {
    let router = router();

    for uri in ["/health", "/api/v1/health"] {
        let (status, _, body) = send(&router, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy"}));
    }

    let (status, _, body) = send(&router, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Engineering Suite API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_custom_and_empty_prefix() {
    let mut config = test_config();
    config.api.prefix = "/calc".to_string();
    let router = router_with(config);
    let (status, _, _) = send(&router, get("/calc/materials")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = send(&router, get("/api/v1/materials")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut config = test_config();
    config.api.prefix = String::new();
    let router = router_with(config);
    let (status, _, _) = send(&router, get("/materials")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id() {
    let router = router();

    let (_, headers, _) = send(&router, get("/health")).await;
    assert!(headers.contains_key(X_REQUEST_ID));

    let request = Request::builder()
        .uri("/health")
        .header(X_REQUEST_ID, "client-supplied-id")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&router, request).await;
    assert_eq!(headers[X_REQUEST_ID], "client-supplied-id");
}

#[tokio::test]
async fn test_security_headers() {
    let (_, headers, _) = send(&router(), get("/health")).await;
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");

    let mut config = test_config();
    config.security.enable_headers = false;
    let (_, headers, _) = send(&router_with(config), get("/health")).await;
    assert!(!headers.contains_key(header::X_FRAME_OPTIONS));
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/box-calculator")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_preflight() {
    let router = router();

    let (status, headers, _) = send(&router, preflight("http://localhost:5173")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");

    let (_, headers, _) = send(&router, preflight("https://preview-42.vercel.app")).await;
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://preview-42.vercel.app"
    );

    let (_, headers, _) = send(&router, preflight("https://evil.example.com")).await;
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, _) = send(&router(), get("/api/v1/does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
