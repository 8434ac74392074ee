use axum::http::StatusCode;
use serde_json::{Value, json};

use bento_testing::auth::expired_token_for;

use crate::helpers::{register_and_login, test_server, with_bearer};

fn setosa_body() -> Value {
    json!({ "sepal_length": 5.1, "sepal_width": 3.5, "petal_length": 1.4, "petal_width": 0.2 })
}

#[tokio::test]
async fn should_serve_banner_and_classes() {
    let server = test_server().await;

    let banner: Value = server.get("/").await.json();
    assert!(banner["message"].as_str().unwrap().contains("Iris"));

    let classes: Value = server.get("/iris/classes").await.json();
    assert_eq!(
        classes,
        json!({ "classes": ["setosa", "versicolor", "virginica"] })
    );
}

#[tokio::test]
async fn should_register_login_and_resolve_me() {
    let server = test_server().await;
    let creds = json!({ "username": "ana", "password": "x" });

    let created = server.post("/users/register").json(&creds).await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    assert_eq!(created.json::<Value>(), json!({ "id": 1, "username": "ana" }));

    let repeat = server.post("/users/register").json(&creds).await;
    assert_eq!(repeat.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(repeat.json::<Value>()["message"], "User already exists");

    let token = register_and_login(&server, "ana", "x").await;
    let me = with_bearer(server.get("/users/me"), &token).await;
    assert_eq!(me.status_code(), StatusCode::OK);
    assert_eq!(me.json::<Value>(), json!({ "id": 1, "username": "ana" }));
}

#[tokio::test]
async fn should_require_token_to_predict() {
    let server = test_server().await;

    let anonymous = server.post("/iris/predict").json(&setosa_body()).await;
    assert_eq!(anonymous.status_code(), StatusCode::UNAUTHORIZED);

    register_and_login(&server, "ana", "x").await;
    let expired = with_bearer(server.post("/iris/predict"), &expired_token_for("ana"))
        .json(&setosa_body())
        .await;
    assert_eq!(expired.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(expired.json::<Value>()["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn should_predict_and_log() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;

    let resp = with_bearer(server.post("/iris/predict"), &token)
        .json(&setosa_body())
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(
        resp.json::<Value>(),
        json!({ "prediction": 0, "class_name": "setosa" })
    );

    let virginica = with_bearer(server.post("/iris/predict"), &token)
        .json(&json!({ "sepal_length": 6.9, "sepal_width": 3.1, "petal_length": 5.4, "petal_width": 2.1 }))
        .await;
    assert_eq!(virginica.json::<Value>()["class_name"], "virginica");

    let logs: Value = with_bearer(server.get("/iris/predictions"), &token)
        .await
        .json();
    let logs = logs.as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["id"], 1);
    assert_eq!(logs[0]["petal_length"], 1.4);
    assert_eq!(logs[0]["predicted_class"], "setosa");
    assert_eq!(logs[1]["predicted_class"], "virginica");
    assert!(logs[0]["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn should_reject_malformed_features() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;

    let missing = with_bearer(server.post("/iris/predict"), &token)
        .json(&json!({ "sepal_length": 5.1 }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>()["kind"], "INVALID_BODY");

    let mistyped = with_bearer(server.post("/iris/predict"), &token)
        .json(&json!({ "sepal_length": "long", "sepal_width": 3.5, "petal_length": 1.4, "petal_width": 0.2 }))
        .await;
    assert_eq!(mistyped.status_code(), StatusCode::BAD_REQUEST);

    let logs: Value = with_bearer(server.get("/iris/predictions"), &token)
        .await
        .json();
    assert_eq!(logs, json!([]));
}

#[tokio::test]
async fn should_page_prediction_logs() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;
    for _ in 0..7 {
        with_bearer(server.post("/iris/predict"), &token)
            .json(&setosa_body())
            .await;
    }

    let default_page: Value = with_bearer(server.get("/iris/predictions"), &token)
        .await
        .json();
    assert_eq!(default_page.as_array().unwrap().len(), 5);

    let second_page: Value = with_bearer(server.get("/iris/predictions"), &token)
        .add_query_param("limit", "5")
        .add_query_param("offset", "5")
        .await
        .json();
    let ids: Vec<i64> = second_page
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 7]);

    let negative = with_bearer(server.get("/iris/predictions"), &token)
        .add_query_param("offset", "-1")
        .await;
    assert_eq!(negative.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(negative.json::<Value>()["kind"], "INVALID_QUERY");

    let far_past_end = with_bearer(server.get("/iris/predictions"), &token)
        .add_query_param("offset", "18446744073709551615")
        .await;
    assert_eq!(far_past_end.status_code(), StatusCode::OK);
    assert_eq!(far_past_end.json::<Value>(), json!([]));
}

#[tokio::test]
async fn should_clamp_out_of_range_limits() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;
    for _ in 0..3 {
        with_bearer(server.post("/iris/predict"), &token)
            .json(&setosa_body())
            .await;
    }

    for limit in ["0", "-1"] {
        let resp = with_bearer(server.get("/iris/predictions"), &token)
            .add_query_param("limit", limit)
            .await;
        assert_eq!(resp.status_code(), StatusCode::OK);
        assert_eq!(resp.json::<Value>().as_array().unwrap().len(), 1);
    }

    let huge: Value = with_bearer(server.get("/iris/predictions"), &token)
        .add_query_param("limit", "1000")
        .await
        .json();
    assert_eq!(huge.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn should_require_token_to_list_predictions() {
    let server = test_server().await;

    let anonymous = server.get("/iris/predictions").await;
    assert_eq!(anonymous.status_code(), StatusCode::UNAUTHORIZED);

    let expired = with_bearer(server.get("/iris/predictions"), &expired_token_for("ana")).await;
    assert_eq!(expired.status_code(), StatusCode::UNAUTHORIZED);
}
