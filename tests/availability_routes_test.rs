// ABOUTME: Integration tests for the available-slots endpoint
// ABOUTME: Covers parameter validation, booked-slot filtering, and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{booking_body, create_test_resources, register_user, send_json, test_router};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_missing_params_rejected() {
    let resources = create_test_resources().await;
    let router = test_router(&resources);

    for uri in [
        "/api/available-slots",
        "/api/available-slots?staffId=1",
        "/api/available-slots?date=2024-01-01",
        "/api/available-slots?staffId=1&date=",
    ] {
        let (status, body) = send_json(&router, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri} should be rejected");
        assert_eq!(body["success"], json!(false));
    }
}

#[tokio::test]
async fn test_unbooked_slots_returned_in_publication_order() {
    let resources = create_test_resources().await;

    for slot in ["09:00", "10:00", "11:00", "14:00"] {
        resources
            .database
            .publish_slot(1, "2024-01-01", slot)
            .await
            .unwrap();
    }

    let router = test_router(&resources);
    let (status, body) = send_json(
        &router,
        "GET",
        "/api/available-slots?staffId=1&date=2024-01-01",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["slots"], json!(["09:00", "10:00", "11:00", "14:00"]));
}

#[tokio::test]
async fn test_booked_start_times_are_filtered() {
    let resources = create_test_resources().await;

    for slot in ["09:00", "10:00", "11:00"] {
        resources
            .database
            .publish_slot(1, "2024-01-01", slot)
            .await
            .unwrap();
    }

    let router = test_router(&resources);
    let token = register_user(&router, "scheduler", "slot-password").await;

    let (status, _) = send_json(
        &router,
        "POST",
        "/api/bookings",
        Some(booking_body(1, "2024-01-01", "10:00", "11:00")),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &router,
        "GET",
        "/api/available-slots?staffId=1&date=2024-01-01",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Only the exact start-time match is dropped; 11:00 survives even
    // though nothing stops a booking from overlapping it mid-interval
    assert_eq!(body["slots"], json!(["09:00", "11:00"]));
}

#[tokio::test]
async fn test_other_staff_and_dates_unaffected() {
    let resources = create_test_resources().await;

    resources
        .database
        .publish_slot(1, "2024-01-01", "10:00")
        .await
        .unwrap();
    resources
        .database
        .publish_slot(2, "2024-01-01", "10:00")
        .await
        .unwrap();
    resources
        .database
        .publish_slot(1, "2024-01-02", "10:00")
        .await
        .unwrap();

    let router = test_router(&resources);
    let token = register_user(&router, "scheduler2", "slot-password").await;

    let (status, _) = send_json(
        &router,
        "POST",
        "/api/bookings",
        Some(booking_body(1, "2024-01-01", "10:00", "11:00")),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Same time for a different staff member stays free
    let (_, body) = send_json(
        &router,
        "GET",
        "/api/available-slots?staffId=2&date=2024-01-01",
        None,
        None,
    )
    .await;
    assert_eq!(body["slots"], json!(["10:00"]));

    // Same staff member on a different date stays free
    let (_, body) = send_json(
        &router,
        "GET",
        "/api/available-slots?staffId=1&date=2024-01-02",
        None,
        None,
    )
    .await;
    assert_eq!(body["slots"], json!(["10:00"]));
}
