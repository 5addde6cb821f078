// ABOUTME: Database-layer tests for users, slots, and the transactional booking check
// ABOUTME: Includes the concurrent double-booking race exercised against a file-backed pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use salon_booking_server::database::{test_utils::create_test_db, Database};
use salon_booking_server::errors::ErrorCode;
use salon_booking_server::models::{NewBooking, User};

fn booking(staff_id: i64, date: &str, start: &str, end: &str) -> NewBooking {
    NewBooking {
        customer_id: 1,
        service_id: 1,
        staff_id,
        booking_date: date.to_owned(),
        start_time: start.to_owned(),
        end_time: end.to_owned(),
        notes: None,
    }
}

#[tokio::test]
async fn test_user_roundtrip() {
    let db = create_test_db().await.unwrap();

    let user = User::new("grace".to_owned(), "hash".to_owned());
    let id = db.create_user(&user).await.unwrap();
    assert_eq!(id, user.id);

    let by_name = db.get_user_by_username("grace").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);
    assert_eq!(by_name.password_hash, "hash");

    let by_id = db.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "grace");

    assert!(db.get_user_by_username("absent").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let db = create_test_db().await.unwrap();

    db.create_user(&User::new("heidi".to_owned(), "h1".to_owned()))
        .await
        .unwrap();
    let err = db
        .create_user(&User::new("heidi".to_owned(), "h2".to_owned()))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_concurrent_registrations_single_winner() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("users.db").display());
    let db = Database::new(&url, 10).await.unwrap();

    let db_a = db.clone();
    let db_b = db.clone();
    let (a, b) = tokio::join!(
        tokio::spawn(async move {
            db_a.create_user(&User::new("ivan".to_owned(), "h1".to_owned()))
                .await
        }),
        tokio::spawn(async move {
            db_b.create_user(&User::new("ivan".to_owned(), "h2".to_owned()))
                .await
        }),
    );

    let results = [a.unwrap(), b.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one concurrent registration may win");

    // The loser sees a conflict, not a bare database error
    let loser = results.iter().find(|r| r.is_err()).unwrap();
    assert_eq!(
        loser.as_ref().unwrap_err().code,
        ErrorCode::ResourceAlreadyExists
    );
}

#[tokio::test]
async fn test_booking_roundtrip_preserves_fields() {
    let db = create_test_db().await.unwrap();

    let mut request = booking(3, "2024-05-10", "13:00", "14:00");
    request.notes = Some("First visit".to_owned());
    let id = db.create_booking(&request).await.unwrap();

    let stored = db.get_booking(id).await.unwrap().unwrap();
    assert_eq!(stored.staff_id, 3);
    assert_eq!(stored.booking_date, "2024-05-10");
    assert_eq!(stored.start_time, "13:00");
    assert_eq!(stored.end_time, "14:00");
    assert_eq!(stored.notes.as_deref(), Some("First visit"));

    assert!(db.get_booking(id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_slot_filtering_matches_booked_start_times_only() {
    let db = create_test_db().await.unwrap();

    for slot in ["09:00", "09:30", "10:00"] {
        db.publish_slot(7, "2024-03-01", slot).await.unwrap();
    }
    db.create_booking(&booking(7, "2024-03-01", "09:30", "10:30"))
        .await
        .unwrap();

    let slots = db.get_available_slots(7, "2024-03-01").await.unwrap();

    // 10:00 sits inside the booked interval but is not a start-time match,
    // so the filter keeps it
    assert_eq!(slots, vec!["09:00".to_owned(), "10:00".to_owned()]);
}

#[tokio::test]
async fn test_overlap_check_rejects_and_rolls_back() {
    let db = create_test_db().await.unwrap();

    db.create_booking(&booking(1, "2024-01-01", "10:00", "11:00"))
        .await
        .unwrap();

    let err = db
        .create_booking(&booking(1, "2024-01-01", "10:45", "11:15"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // Containing interval also conflicts
    let err = db
        .create_booking(&booking(1, "2024-01-01", "09:00", "12:00"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    assert_eq!(db.count_bookings(1, "2024-01-01").await.unwrap(), 1);

    // The rolled-back transactions leave the connection usable
    db.create_booking(&booking(1, "2024-01-01", "11:00", "12:00"))
        .await
        .unwrap();
    assert_eq!(db.count_bookings(1, "2024-01-01").await.unwrap(), 2);
}

#[tokio::test]
async fn test_aborted_booking_leaves_pool_usable() {
    // Single-connection pool: a transaction abandoned by a cancelled task
    // would poison the only connection every later write receives
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("bookings.db").display());
    let db = Database::new(&url, 1).await.unwrap();

    for i in 0..10_i64 {
        let db_task = db.clone();
        let request = booking(8, "2024-07-01", &format!("{i:02}:00"), &format!("{i:02}:30"));
        let handle = tokio::spawn(async move { db_task.create_booking(&request).await });

        // Cancel the task partway through, as a client disconnect does
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        handle.abort();
        let _ = handle.await;

        // A follow-up booking on the same pool must still succeed
        db.create_booking(&booking(8, "2024-07-02", &format!("{i:02}:00"), &format!("{i:02}:30")))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_concurrent_identical_bookings_single_winner() {
    // File-backed database so both tasks get real pooled connections
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("bookings.db").display());
    let db = Database::new(&url, 10).await.unwrap();

    let db_a = db.clone();
    let db_b = db.clone();
    let request = booking(5, "2024-06-01", "14:00", "15:00");
    let request_a = request.clone();
    let request_b = request;

    let (a, b) = tokio::join!(
        tokio::spawn(async move { db_a.create_booking(&request_a).await }),
        tokio::spawn(async move { db_b.create_booking(&request_b).await }),
    );

    let results = [a.unwrap(), b.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(successes, 1, "exactly one concurrent booking may win");
    assert_eq!(db.count_bookings(5, "2024-06-01").await.unwrap(), 1);

    let loser = results.iter().find(|r| r.is_err()).unwrap();
    assert_eq!(
        loser.as_ref().unwrap_err().code,
        ErrorCode::ResourceAlreadyExists
    );
}
