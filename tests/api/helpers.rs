use std::net::TcpListener;

use reqwest::{Client, Method, Response};

use serde::Serialize;

use sqlx::PgPool;

use lantrn::app;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub email: String,
    pub target_date: String,
    pub facility_id: i32,
    pub status: Option<String>,
}

impl NewSubscription {
    pub fn valid(facility_id: i32) -> Self {
        Self {
            email: "camper@example.com".into(),
            target_date: "2024-07-04".into(),
            facility_id,
            status: Some("pending".into()),
        }
    }
}

pub struct TestApp {
    addr: String,

    pub client: Client,
}

impl TestApp {
    pub async fn spawn(pool: &PgPool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let server = app::run(listener, pool.clone()).expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self { addr, client }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn facilities(&self, query: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("facilities?{}", query))
            .send()
            .await
    }

    pub async fn facility(&self, id: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("facilities/{}", id))
            .send()
            .await
    }

    pub async fn subscriptions(&self, query: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("subscriptions?{}", query))
            .send()
            .await
    }

    pub async fn subscription_create(
        &self,
        new_subscription: &NewSubscription,
    ) -> reqwest::Result<Response> {
        self.request(Method::POST, "subscriptions")
            .json(new_subscription)
            .send()
            .await
    }

    pub async fn subscription_tokens(&self, query: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("subscription_tokens?{}", query))
            .send()
            .await
    }

    pub async fn subscription_token_create(&self, subscription_id: i32) -> reqwest::Result<Response> {
        self.request(Method::POST, "subscription_tokens")
            .json(&serde_json::json!({ "subscriptionId": subscription_id }))
            .send()
            .await
    }
}

/// Insert a facility, optionally located at `(lat, lng)`, returning its id
pub async fn insert_facility(
    pool: &PgPool,
    name: &str,
    facility_id: &str,
    at: Option<(f64, f64)>,
) -> i32 {
    let (lat, lng) = at.unzip();
    sqlx::query_scalar(
        r#"insert into "facility" (name, facility_id, latitude, longitude, geom)
           values ($1, $2, $3, $4,
                   case when $3::float8 is null then null
                        else ST_SetSRID(ST_MakePoint($4, $3), 4326)::geography end)
           returning id"#,
    )
    .bind(name)
    .bind(facility_id)
    .bind(lat)
    .bind(lng)
    .fetch_one(pool)
    .await
    .expect("Failed to insert facility")
}

pub async fn insert_primary_media(pool: &PgPool, facility_id: &str, url: &str) {
    sqlx::query(
        r#"insert into "facility_media" (title, url, is_primary, facility_id) values ('photo', $1, true, $2)"#,
    )
    .bind(url)
    .bind(facility_id)
    .execute(pool)
    .await
    .expect("Failed to insert facility media");
}
