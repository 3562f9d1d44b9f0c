use reqwest::StatusCode;

use serde_json::Value;

use sqlx::PgPool;

use crate::helpers::{insert_facility, NewSubscription, TestApp};

async fn subscription_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar(r#"select count(*) from "subscription""#)
        .fetch_one(pool)
        .await
        .expect("Failed to count subscriptions")
}

#[sqlx::test(migrations = "./migrations")]
async fn create_then_list_round_trips(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let facility_id = insert_facility(&pool, "Upper Pines", "F1", None).await;

    let res = app
        .subscription_create(&NewSubscription::valid(facility_id))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let created: Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let res = app
        .subscriptions(&format!("facility_ids={}&status=pending", facility_id))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: Value = res.json().await.unwrap();
    assert_eq!(1, body["metadata"]["total"]);
    assert_eq!(id, body["data"][0]["id"].as_i64().unwrap());
    assert_eq!("camper@example.com", body["data"][0]["email"]);
    assert_eq!("2024-07-04", body["data"][0]["targetDate"]);
    assert_eq!(facility_id, body["data"][0]["facilityId"]);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn unmatched_status_is_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let facility_id = insert_facility(&pool, "Upper Pines", "F1", None).await;

    app.subscription_create(&NewSubscription::valid(facility_id))
        .await
        .expect("Failed to execute request");

    let res = app
        .subscriptions("status=nonexistent")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());
    assert_eq!("No subscriptions found", res.text().await.unwrap());

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn create_rejects_invalid_payloads(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let facility_id = insert_facility(&pool, "Upper Pines", "F1", None).await;

    let test_cases = vec![
        NewSubscription {
            email: "not-an-email".into(),
            ..NewSubscription::valid(facility_id)
        },
        NewSubscription {
            target_date: "July 4th".into(),
            ..NewSubscription::valid(facility_id)
        },
    ];

    for body in test_cases {
        let res = app
            .subscription_create(&body)
            .await
            .expect("Failed to execute request");

        assert_eq!(StatusCode::BAD_REQUEST, res.status());
    }
    assert_eq!(0, subscription_count(&pool).await);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn create_for_unknown_facility_fails_without_writing(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .subscription_create(&NewSubscription::valid(4242))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    assert_eq!("Something went wrong", res.text().await.unwrap());
    assert_eq!(0, subscription_count(&pool).await);

    Ok(())
}
