use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use serde_json::{Value, json};

use bento_testing::auth::{expired_token_for, forged_token_for, token_for};

use crate::helpers::{register_and_login, test_server, with_bearer};

fn pancakes() -> Value {
    json!({ "title": "Pancakes", "ingredients": "flour, eggs, milk", "time_minutes": 20 })
}

// ── Accounts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_walk_through_register_login_protected() {
    let server = test_server().await;
    let creds = json!({ "username": "ana", "password": "x" });

    let first = server.post("/register").json(&creds).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);
    assert_eq!(first.json::<Value>()["message"], "User created successfully");

    let repeat = server.post("/register").json(&creds).await;
    assert_eq!(repeat.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = repeat.json();
    assert_eq!(body["kind"], "USER_ALREADY_EXISTS");
    assert_eq!(body["message"], "User already exists");

    let login = server.post("/login").json(&creds).await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let token = login.json::<Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_owned();

    let me = with_bearer(server.get("/protected"), &token).await;
    assert_eq!(me.status_code(), StatusCode::OK);
    assert_eq!(me.json::<Value>(), json!({ "logged_in_as": "ana" }));
}

#[tokio::test]
async fn should_not_echo_password_on_register() {
    let server = test_server().await;
    let resp = server
        .post("/register")
        .json(&json!({ "username": "ana", "password": "s3cret" }))
        .await;
    assert!(!resp.text().contains("s3cret"));
}

#[tokio::test]
async fn should_reject_malformed_registration() {
    let server = test_server().await;

    let missing = server
        .post("/register")
        .json(&json!({ "username": "ana" }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>()["kind"], "INVALID_BODY");

    let mistyped = server
        .post("/register")
        .json(&json!({ "username": "ana", "password": 7 }))
        .await;
    assert_eq!(mistyped.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(mistyped.json::<Value>()["kind"], "INVALID_BODY");

    let empty = server
        .post("/register")
        .json(&json!({ "username": "ana", "password": "" }))
        .await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(empty.json::<Value>()["kind"], "MISSING_FIELD");
}

#[tokio::test]
async fn should_fail_login_identically_for_wrong_password_and_unknown_user() {
    let server = test_server().await;
    register_and_login(&server, "ana", "x").await;

    let wrong = server
        .post("/login")
        .json(&json!({ "username": "ana", "password": "y" }))
        .await;
    let unknown = server
        .post("/login")
        .json(&json!({ "username": "bob", "password": "x" }))
        .await;

    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
    let wrong_body: Value = wrong.json();
    assert_eq!(wrong_body, unknown.json::<Value>());
    assert_eq!(wrong_body["message"], "Invalid credentials");
}

// ── Guard ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_expired_token_on_every_protected_endpoint() {
    let server = test_server().await;
    let good = register_and_login(&server, "ana", "x").await;
    with_bearer(server.post("/recipes"), &good)
        .json(&pancakes())
        .await;

    let expired = expired_token_for("ana");
    let responses = [
        with_bearer(server.get("/protected"), &expired).await,
        with_bearer(server.post("/recipes"), &expired)
            .json(&pancakes())
            .await,
        with_bearer(server.put("/recipes/1"), &expired)
            .json(&json!({ "title": "Crepes" }))
            .await,
        with_bearer(server.delete("/recipes/1"), &expired).await,
    ];
    for resp in responses {
        assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.json::<Value>()["kind"], "INVALID_TOKEN");
    }

    // Nothing changed behind the rejected requests.
    let list: Value = server.get("/recipes").await.json();
    assert_eq!(list[0]["title"], "Pancakes");
}

#[tokio::test]
async fn should_reject_missing_forged_and_foreign_scheme_credentials() {
    let server = test_server().await;
    register_and_login(&server, "ana", "x").await;

    let missing = server.get("/protected").await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);

    let forged = with_bearer(server.get("/protected"), &forged_token_for("ana")).await;
    assert_eq!(forged.status_code(), StatusCode::UNAUTHORIZED);

    let basic = server
        .get("/protected")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic YW5hOng="))
        .await;
    assert_eq!(basic.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_token_for_unregistered_user() {
    let server = test_server().await;
    let token = token_for("ghost");
    let resp = with_bearer(server.get("/protected"), &token).await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

// ── Recipes ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_created_recipe_once_and_honor_filters() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;

    let created = with_bearer(server.post("/recipes"), &token)
        .json(&pancakes())
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created: Value = created.json();
    assert_eq!(created["message"], "Recipe created successfully");
    let id = created["recipe_id"].as_i64().unwrap();

    let all: Value = server.get("/recipes").await.json();
    assert_eq!(
        all,
        json!([{ "id": id, "title": "Pancakes", "ingredients": "flour, eggs, milk", "time_minutes": 20 }])
    );

    let by_ingredient: Value = server
        .get("/recipes")
        .add_query_param("ingredients", "eggs")
        .await
        .json();
    assert_eq!(by_ingredient.as_array().unwrap().len(), 1);

    let other_ingredient: Value = server
        .get("/recipes")
        .add_query_param("ingredients", "tofu")
        .await
        .json();
    assert_eq!(other_ingredient, json!([]));

    let too_slow: Value = server
        .get("/recipes")
        .add_query_param("max_time", "19")
        .await
        .json();
    assert_eq!(too_slow, json!([]));

    let in_time: Value = server
        .get("/recipes")
        .add_query_param("max_time", "20")
        .await
        .json();
    assert_eq!(in_time.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_match_ingredients_as_literal_text() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;
    with_bearer(server.post("/recipes"), &token)
        .json(&pancakes())
        .await;
    with_bearer(server.post("/recipes"), &token)
        .json(&json!({ "title": "Rich cake", "ingredients": "100% cocoa, sugar", "time_minutes": 40 }))
        .await;

    let count = |resp: axum_test::TestResponse| resp.json::<Value>().as_array().unwrap().len();

    let percent = server.get("/recipes").add_query_param("ingredients", "%").await;
    assert_eq!(count(percent), 1);

    let underscore = server
        .get("/recipes")
        .add_query_param("ingredients", "F_our")
        .await;
    assert_eq!(count(underscore), 0);

    let upper = server
        .get("/recipes")
        .add_query_param("ingredients", "FLOUR")
        .await;
    assert_eq!(count(upper), 1);
}

#[tokio::test]
async fn should_list_in_insertion_order() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;
    for title in ["A", "B", "C"] {
        with_bearer(server.post("/recipes"), &token)
            .json(&json!({ "title": title, "ingredients": "salt", "time_minutes": 1 }))
            .await;
    }
    let all: Value = server.get("/recipes").await.json();
    let titles: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn should_reject_non_integer_max_time() {
    let server = test_server().await;
    let resp = server
        .get("/recipes")
        .add_query_param("max_time", "soon")
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_QUERY");
}

#[tokio::test]
async fn should_reject_invalid_recipe_bodies() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;

    let negative = with_bearer(server.post("/recipes"), &token)
        .json(&json!({ "title": "T", "ingredients": "i", "time_minutes": -5 }))
        .await;
    assert_eq!(negative.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(negative.json::<Value>()["kind"], "INVALID_FIELD");

    let unknown_field = with_bearer(server.post("/recipes"), &token)
        .json(&json!({ "title": "T", "ingredients": "i", "time_minutes": 5, "chef": "me" }))
        .await;
    assert_eq!(unknown_field.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_field.json::<Value>()["kind"], "INVALID_BODY");

    let all: Value = server.get("/recipes").await.json();
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn should_apply_update_rules() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;
    with_bearer(server.post("/recipes"), &token)
        .json(&pancakes())
        .await;

    let unknown = with_bearer(server.put("/recipes/999"), &token)
        .json(&json!({ "title": "Crepes" }))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(unknown.json::<Value>()["kind"], "RECIPE_NOT_FOUND");

    let unknown_with_bad_body = with_bearer(server.put("/recipes/999"), &token)
        .json(&json!({ "time_minutes": "x" }))
        .await;
    assert_eq!(unknown_with_bad_body.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        unknown_with_bad_body.json::<Value>()["kind"],
        "RECIPE_NOT_FOUND"
    );

    let not_an_id = with_bearer(server.put("/recipes/abc"), &token)
        .json(&json!({ "title": "Crepes" }))
        .await;
    assert_eq!(not_an_id.status_code(), StatusCode::NOT_FOUND);

    let empty = with_bearer(server.put("/recipes/1"), &token)
        .json(&json!({}))
        .await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(empty.json::<Value>()["message"], "No data provided");

    let partly_invalid = with_bearer(server.put("/recipes/1"), &token)
        .json(&json!({ "title": "Crepes", "time_minutes": "twenty" }))
        .await;
    assert_eq!(partly_invalid.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(partly_invalid.json::<Value>()["kind"], "INVALID_BODY");

    let negative = with_bearer(server.put("/recipes/1"), &token)
        .json(&json!({ "title": "Crepes", "time_minutes": -1 }))
        .await;
    assert_eq!(negative.status_code(), StatusCode::BAD_REQUEST);

    let unchanged: Value = server.get("/recipes").await.json();
    assert_eq!(unchanged[0]["title"], "Pancakes");
    assert_eq!(unchanged[0]["time_minutes"], 20);

    let single = with_bearer(server.put("/recipes/1"), &token)
        .json(&json!({ "time_minutes": 25 }))
        .await;
    assert_eq!(single.status_code(), StatusCode::OK);
    assert_eq!(
        single.json::<Value>()["message"],
        "Recipe updated successfully"
    );

    let updated: Value = server.get("/recipes").await.json();
    assert_eq!(
        updated[0],
        json!({ "id": 1, "title": "Pancakes", "ingredients": "flour, eggs, milk", "time_minutes": 25 })
    );
}

#[tokio::test]
async fn should_delete_then_report_not_found() {
    let server = test_server().await;
    let token = register_and_login(&server, "ana", "x").await;
    with_bearer(server.post("/recipes"), &token)
        .json(&pancakes())
        .await;

    let first = with_bearer(server.delete("/recipes/1"), &token).await;
    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(
        first.json::<Value>()["message"],
        "Recipe deleted successfully"
    );

    let second = with_bearer(server.delete("/recipes/1"), &token).await;
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
}

// ── Misc ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_render_unknown_route_as_json_404() {
    let server = test_server().await;
    let resp = server.get("/nope").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "NOT_FOUND");
}

#[tokio::test]
async fn should_report_ready_with_live_database() {
    let server = test_server().await;
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let server = test_server().await;
    let resp = server.get("/healthz").await;
    assert!(resp.headers().contains_key("x-request-id"));
}
