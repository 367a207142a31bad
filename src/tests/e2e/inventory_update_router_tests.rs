use crate::modules::inventory_update::adapters::outbound::workbook::WorkbookReader;
use crate::modules::inventory_update::adapters::outbound::workbook_calamine::CalamineWorkbookReader;
use crate::modules::inventory_update::core::table::Cell;
use crate::shell::http::router;
use crate::tests::fixtures::app_state::AppStateBuilder;
use crate::tests::fixtures::multipart::MultipartBody;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn updates_the_inventory_workbook_end_to_end() {
    let response = router(AppStateBuilder::new().build())
        .oneshot(MultipartBody::sample("2024-03").into_request("/api/process"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let table = CalamineWorkbookReader.read(&bytes).unwrap();

    let cell = |row: usize, column: &str| table.rows()[row][table.column_index(column).unwrap()].clone();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(cell(0, "Product"), Cell::text("A1"));
    assert_eq!(cell(0, "Mar-qty-2024"), Cell::Number(3.0));
    assert_eq!(cell(0, "Inventory$"), Cell::Number(50.0));
    assert_eq!(cell(0, "Inv. NBO $"), Cell::Number(50.0));
    assert_eq!(cell(0, "Discontinued Inv"), Cell::Empty);
    assert_eq!(cell(1, "Product"), Cell::text("B2"));
    assert_eq!(cell(1, "Cogs12"), Cell::Number(30.0));
    assert_eq!(cell(1, "Discontinued Inv"), Cell::Number(10.0));
    assert_eq!(cell(1, "COGS Rank"), Cell::text("D"));
}

#[tokio::test]
async fn rejects_uploads_over_the_body_limit() {
    let state = AppStateBuilder::new().upload_limit_bytes(64).build();

    let response = router(state)
        .oneshot(MultipartBody::sample("2024-03").into_request("/api/process"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn only_accepts_posts_for_the_inventory_update() {
    let response = router(AppStateBuilder::new().build())
        .oneshot(Request::get("/api/process").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
