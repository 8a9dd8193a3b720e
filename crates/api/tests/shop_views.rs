//! HTTP-level integration tests for the catalog, measurement, and tailor pages.

mod common;

use axum::http::StatusCode;
use common::{
    assert_redirect, body_text, create_account, create_dress, create_tailor, get, login,
    post_form, TEST_PASSWORD,
};
use sqlx::SqlitePool;
use tailorshop_db::repositories::MeasurementRepo;

const MEASUREMENTS: &str = r#"{"waist": "32", "length": "40"}"#;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn home_requires_login(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/", None).await;
    assert_redirect(&response, "/login");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn home_lists_every_dress(pool: SqlitePool) {
    let tailor = create_tailor(&pool, "tailoruser").await;
    create_dress(&pool, &tailor, "Test Dress").await;
    create_dress(&pool, &tailor, "Evening Gown").await;
    create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool);
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = get(app, "/", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    let first = html.find("Test Dress").expect("first dress listed");
    let second = html.find("Evening Gown").expect("second dress listed");
    assert!(first < second);
    assert!(html.contains("100.00"));
    assert!(html.contains("test_image.jpg"));
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn measurement_form_renders(pool: SqlitePool) {
    let tailor = create_tailor(&pool, "tailoruser").await;
    let dress = create_dress(&pool, &tailor, "Test Dress").await;
    create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool);
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = get(app, &format!("/submit_measurements/{}", dress.id), Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Test Dress"));
    assert!(html.contains(r#"name="measurements""#));
}

/// The submitted text is stored verbatim against the caller and the dress.
#[sqlx::test(migrations = "../db/migrations")]
async fn submitting_measurements_stores_them(pool: SqlitePool) {
    let tailor = create_tailor(&pool, "tailoruser").await;
    let dress = create_dress(&pool, &tailor, "Test Dress").await;
    let customer = create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = post_form(
        app,
        &format!("/submit_measurements/{}", dress.id),
        &[("measurements", MEASUREMENTS)],
        Some(&cookie),
    )
    .await;

    assert_redirect(&response, "/");
    let stored = MeasurementRepo::list_for_account_and_dress(&pool, customer.id, dress.id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].measurements, MEASUREMENTS);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeated_and_empty_submissions_each_create_a_row(pool: SqlitePool) {
    let tailor = create_tailor(&pool, "tailoruser").await;
    let dress = create_dress(&pool, &tailor, "Test Dress").await;
    let customer = create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;
    let uri = format!("/submit_measurements/{}", dress.id);

    post_form(app.clone(), &uri, &[("measurements", MEASUREMENTS)], Some(&cookie)).await;
    let response = post_form(app, &uri, &[], Some(&cookie)).await;

    assert_redirect(&response, "/");
    let stored = MeasurementRepo::list_for_account_and_dress(&pool, customer.id, dress.id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].measurements, "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_dress_is_404(pool: SqlitePool) {
    let customer = create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = get(app.clone(), "/submit_measurements/999", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(
        app,
        "/submit_measurements/999",
        &[("measurements", MEASUREMENTS)],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let stored = MeasurementRepo::list_for_account_and_dress(&pool, customer.id, 999)
        .await
        .unwrap();
    assert!(stored.is_empty());
}

/// Ids that are not integers name no page.
#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_ids_are_404(pool: SqlitePool) {
    create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;

    for uri in ["/submit_measurements/abc", "/tailor_work/abc", "/tailor_work/1.5"] {
        let response = get(app.clone(), uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let response = post_form(
        app,
        "/submit_measurements/abc",
        &[("measurements", MEASUREMENTS)],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurements")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_submission_is_redirected(pool: SqlitePool) {
    let tailor = create_tailor(&pool, "tailoruser").await;
    let dress = create_dress(&pool, &tailor, "Test Dress").await;
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        &format!("/submit_measurements/{}", dress.id),
        &[("measurements", MEASUREMENTS)],
        None,
    )
    .await;

    assert_redirect(&response, "/login");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurements")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Tailor work
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn tailor_work_lists_the_tailors_dresses(pool: SqlitePool) {
    let tailor = create_tailor(&pool, "tailoruser").await;
    create_dress(&pool, &tailor, "Test Dress").await;
    let other = create_tailor(&pool, "othertailor").await;
    create_dress(&pool, &other, "Someone Else's Dress").await;
    create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool);
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = get(app, &format!("/tailor_work/{}", tailor.id), Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Test Dress"));
    assert!(html.contains("tailoruser"));
    assert!(!html.contains("Someone Else"));
    assert!(!html.contains("Measurement requests"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_tailor_is_404(pool: SqlitePool) {
    create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool);
    let cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;

    let response = get(app, "/tailor_work/999", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tailor_sees_requests_on_own_page(pool: SqlitePool) {
    let tailor = create_tailor(&pool, "tailoruser").await;
    let dress = create_dress(&pool, &tailor, "Test Dress").await;
    create_account(&pool, "testuser").await;
    let app = common::build_test_app(pool);

    let customer_cookie = login(app.clone(), "testuser", TEST_PASSWORD).await;
    post_form(
        app.clone(),
        &format!("/submit_measurements/{}", dress.id),
        &[("measurements", MEASUREMENTS)],
        Some(&customer_cookie),
    )
    .await;

    let tailor_cookie = login(app.clone(), "tailoruser", TEST_PASSWORD).await;
    let response = get(app, &format!("/tailor_work/{}", tailor.id), Some(&tailor_cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Measurement requests"));
    assert!(html.contains("testuser"));
    assert!(html.contains("&quot;waist&quot;"));
}
