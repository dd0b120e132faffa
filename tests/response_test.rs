// ABOUTME: Integration tests for the API response envelopes
// ABOUTME: Validates ApiResponse and ApiResult JSON shapes and conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use app_shared::{ApiResponse, ApiResult, AppError, PaginatedResponse};
use serde_json::json;

#[test]
fn test_api_response_without_message() {
    let response = ApiResponse::new(json!({ "id": 7 }));

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "data": { "id": 7 } })
    );
}

#[test]
fn test_api_response_with_message() {
    let response = ApiResponse::new(vec![1, 2]).with_message("Loaded");

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "data": [1, 2], "message": "Loaded" })
    );
}

#[test]
fn test_api_response_deserialize_missing_message() {
    let response: ApiResponse<String> =
        serde_json::from_value(json!({ "data": "hello" })).unwrap();

    assert_eq!(response.data, "hello");
    assert_eq!(response.message, None);
}

#[test]
fn test_api_response_wraps_paginated_page() {
    let page = PaginatedResponse::new(vec!["x"], 1, 1, 20);
    let response = ApiResponse::new(page);

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "data": { "data": ["x"], "total": 1, "page": 1, "pageSize": 20 }
        })
    );
}

#[test]
fn test_api_response_map_keeps_message() {
    let response = ApiResponse::new(2).with_message("two").map(|n| n * 2);

    assert_eq!(response.data, 4);
    assert_eq!(response.message.as_deref(), Some("two"));
}

#[test]
fn test_api_result_shapes() {
    assert_eq!(
        serde_json::to_value(ApiResult::ok()).unwrap(),
        json!({ "success": true })
    );
    assert_eq!(
        serde_json::to_value(ApiResult::ok_with_message("Saved")).unwrap(),
        json!({ "success": true, "message": "Saved" })
    );
    assert_eq!(
        serde_json::to_value(ApiResult::failure("Nope")).unwrap(),
        json!({ "success": false, "message": "Nope" })
    );
}

#[test]
fn test_api_result_from_app_error() {
    let error = AppError::not_found("Activity");

    let borrowed = ApiResult::from(&error);
    assert!(!borrowed.success);
    assert_eq!(borrowed.message.as_deref(), Some("Activity not found"));

    let owned: ApiResult = error.into();
    assert_eq!(owned, borrowed);
}
