use reqwest::StatusCode;

use serde_json::Value;

use sqlx::PgPool;

use crate::helpers::{insert_facility, insert_primary_media, TestApp};

const YOSEMITE: (f64, f64) = (37.7456, -119.5936);
const MARIPOSA: (f64, f64) = (37.4849, -119.9663);
const LOS_ANGELES: (f64, f64) = (34.0522, -118.2437);

#[sqlx::test(migrations = "./migrations")]
async fn listing_returns_facilities_with_primary_images(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    insert_facility(&pool, "Upper Pines", "F1", Some(YOSEMITE)).await;
    insert_facility(&pool, "Lower Pines", "F2", Some(YOSEMITE)).await;
    insert_primary_media(&pool, "F1", "https://img/upper.jpg").await;

    let res = app.facilities("").await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: Value = res.json().await.unwrap();
    assert_eq!(2, body["metadata"]["total"]);
    assert_eq!(1, body["metadata"]["page"]);
    // Default sort is by name ascending
    assert_eq!("Lower Pines", body["data"][0]["name"]);
    assert_eq!("", body["data"][0]["primaryImg"]);
    assert_eq!("https://img/upper.jpg", body["data"][1]["primaryImg"]);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn listing_near_a_point_only_returns_nearby_facilities(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    insert_facility(&pool, "Upper Pines", "F1", Some(YOSEMITE)).await;
    insert_facility(&pool, "Mariposa", "F2", Some(MARIPOSA)).await;
    insert_facility(&pool, "Dockweiler", "F3", Some(LOS_ANGELES)).await;

    let res = app
        .facilities(&format!("lat={}&lng={}&sort=za", YOSEMITE.0, YOSEMITE.1))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: Value = res.json().await.unwrap();
    assert_eq!(2, body["metadata"]["total"]);
    assert_eq!("Upper Pines", body["data"][0]["name"]);
    assert_eq!("Mariposa", body["data"][1]["name"]);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn listing_with_nothing_nearby_is_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    insert_facility(&pool, "Dockweiler", "F3", Some(LOS_ANGELES)).await;

    let res = app
        .facilities(&format!("lat={}&lng={}", YOSEMITE.0, YOSEMITE.1))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());
    assert_eq!("No facilities found", res.text().await.unwrap());

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn listing_rejects_malformed_parameters(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    insert_facility(&pool, "Upper Pines", "F1", Some(YOSEMITE)).await;

    for query in ["page=0", "page=two", "lat=north&lng=1", "lat=1&lng=500"] {
        let res = app.facilities(query).await.expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "query {:?} was not rejected",
            query
        );
    }

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn single_facility_is_found_by_id(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let id = insert_facility(&pool, "Upper Pines", "F1", Some(YOSEMITE)).await;
    insert_primary_media(&pool, "F1", "https://img/upper.jpg").await;

    let res = app
        .facility(&id.to_string())
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: Value = res.json().await.unwrap();
    assert_eq!(id, body["id"]);
    assert_eq!("F1", body["facilityId"]);
    assert_eq!("https://img/upper.jpg", body["primaryImg"]);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_facility_is_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app.facility("4242").await.expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());
    assert_eq!("Facility 4242 not found", res.text().await.unwrap());

    Ok(())
}
