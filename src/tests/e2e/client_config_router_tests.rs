use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app_state::AppStateBuilder;
use crate::tests::fixtures::settings_source::InMemorySettingsSourceBuilder;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn state(builder: InMemorySettingsSourceBuilder) -> AppState {
    AppStateBuilder::new().settings(builder).build()
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, String) {
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_the_script_on_any_path() {
    let state = state(
        InMemorySettingsSourceBuilder::new()
            .client_id(Some("abc123"))
            .tenant_id(Some("tenant-xyz")),
    );

    for path in ["/api/config.js", "/config.js", "/anything/else"] {
        let (status, body) = send(
            state.clone(),
            Request::get(path).body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "path {path}");
        assert_eq!(
            body,
            r#"window.EXCEL_UP_CFG = {"clientId":"abc123","authority":"https://login.microsoftonline.com/tenant-xyz/","tenantId":"tenant-xyz","scopes":["Files.Read.All"]};"#
        );
    }
}

#[tokio::test]
async fn returns_byte_identical_responses_for_the_same_environment() {
    let state = state(InMemorySettingsSourceBuilder::new());

    let first = send(
        state.clone(),
        Request::get("/api/config.js").body(Body::empty()).unwrap(),
    )
    .await;
    let second = send(
        state,
        Request::get("/api/config.js").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn reports_health_even_when_misconfigured() {
    let state = state(
        InMemorySettingsSourceBuilder::new()
            .client_id(None)
            .tenant_id(None),
    );

    let (health_status, health_body) = send(
        state.clone(),
        Request::get("/healthz").body(Body::empty()).unwrap(),
    )
    .await;
    let (config_status, config_body) = send(
        state,
        Request::get("/api/config.js").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(health_status, StatusCode::OK);
    assert_eq!(health_body, "ok");
    assert_eq!(config_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        config_body,
        "configuration missing: AZURE_CLIENT_ID, AZURE_TENANT_ID not configured"
    );
}

#[tokio::test]
async fn allows_cross_origin_reads_of_the_json_config() {
    let response = router(state(InMemorySettingsSourceBuilder::new()))
        .oneshot(
            Request::get("/api/config.json")
                .header(header::ORIGIN, "https://excel.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
