use crate::helpers::TestApp;

#[tokio::test]
async fn home_is_served_to_anonymous_visitors() {
    let app = TestApp::new().await;

    let response = app.get_home().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<h1>Home</h1>"));
    assert!(body.contains("/accounts/login/"));
}

#[tokio::test]
async fn home_greets_signed_in_users() {
    let app = TestApp::new().await;
    let username = app.register_user().await;

    let response = app.get_home().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<h1>Home</h1>"));
    assert!(body.contains(&username));
}
