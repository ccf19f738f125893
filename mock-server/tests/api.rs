use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, definitions, Ruleset};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_rulesets_empty() {
    let resp = app().oneshot(get_request("/JSON/Ruleset/List")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let rulesets: Vec<Ruleset> = body_json(resp).await;
    assert!(rulesets.is_empty());
}

#[tokio::test]
async fn list_definitions_returns_fixed_list() {
    let resp = app()
        .oneshot(get_request("/JSON/Ruleset/ListDefinitions"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, definitions());
}

// --- new ---

#[tokio::test]
async fn new_ruleset_assigns_id() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/New", r#"{"name":"WFTDA"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ruleset: Ruleset = body_json(resp).await;
    assert_eq!(ruleset["name"], "WFTDA");
    let id = ruleset["id"].as_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn new_ruleset_keeps_caller_id() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/New", r#"{"id":"custom","name":"JRDA"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ruleset: Ruleset = body_json(resp).await;
    assert_eq!(ruleset["id"], "custom");
}

#[tokio::test]
async fn new_ruleset_accepts_form_content_type() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/JSON/Ruleset/New")
                .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(r#"{"name":"Plain"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn new_ruleset_malformed_json_returns_400() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/New", "not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn new_ruleset_non_object_returns_400() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/New", "[1,2,3]"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_ruleset_not_found() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/Update", r#"{"id":"missing"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_ruleset_without_id_returns_400() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/Update", r#"{"name":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_ruleset_not_found() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/Delete", r#"{"id":"missing"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reads_reject_post() {
    let resp = app()
        .oneshot(json_request("/JSON/Ruleset/List", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- full lifecycle ---

#[tokio::test]
async fn ruleset_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // new
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("/JSON/Ruleset/New", r#"{"name":"WFTDA","rules":{"Period.Number":"2"}}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Ruleset = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    // duplicate id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("/JSON/Ruleset/New", &format!(r#"{{"id":"{id}"}}"#)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // list holds the one ruleset
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/JSON/Ruleset/List"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let rulesets: Vec<Ruleset> = body_json(resp).await;
    assert_eq!(rulesets, vec![created.clone()]);

    // update replaces the stored object
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "/JSON/Ruleset/Update",
            &format!(r#"{{"id":"{id}","name":"WFTDA 2023"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Ruleset = body_json(resp).await;
    assert_eq!(updated["name"], "WFTDA 2023");
    assert!(updated.get("rules").is_none());

    // delete echoes the removed ruleset
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("/JSON/Ruleset/Delete", &format!(r#"{{"id":"{id}"}}"#)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: Ruleset = body_json(resp).await;
    assert_eq!(removed, updated);

    // delete again gets a 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("/JSON/Ruleset/Delete", &format!(r#"{{"id":"{id}"}}"#)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list is empty after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/JSON/Ruleset/List"))
        .await
        .unwrap();
    let rulesets: Vec<Ruleset> = body_json(resp).await;
    assert!(rulesets.is_empty());
}
