use crate::helpers::{PASSWORD, TestApp, location, new_client, post_login_with};

#[tokio::test]
async fn login_form_carries_next() {
    let app = TestApp::new().await;

    let response = app.get("/accounts/login/?next=%2Fspecial%2F").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"name="next" value="/special/""#));
}

#[tokio::test]
async fn wrong_password_rerenders_form_without_session() {
    let app = TestApp::new().await;
    let username = app.register_user().await;
    let browser = new_client();

    let response = post_login_with(&browser, &app.address, &username, "wrong-password", None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
    let body = response.text().await.unwrap();
    assert!(body.contains("Please enter a correct username and password."));
    assert!(body.contains(&username));
}

#[tokio::test]
async fn login_honours_safe_next() {
    let app = TestApp::new().await;
    let username = app.register_user().await;
    let browser = new_client();

    let response =
        post_login_with(&browser, &app.address, &username, PASSWORD, Some("/special/")).await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/special/");

    let special = crate::helpers::get_with(&browser, &app.address, "/special/").await;
    assert_eq!(special.status().as_u16(), 200);
}

#[tokio::test]
async fn login_ignores_external_next() {
    let app = TestApp::new().await;
    let username = app.register_user().await;
    let browser = new_client();

    let response = post_login_with(
        &browser,
        &app.address,
        &username,
        PASSWORD,
        Some("https://evil.example/"),
    )
    .await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = TestApp::new().await;
    app.register_user().await;
    assert_eq!(app.get_special().await.status().as_u16(), 200);

    let response = app.post_logout().await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/");
    assert_eq!(app.get_special().await.status().as_u16(), 302);
}

#[tokio::test]
async fn logout_is_idempotent_for_anonymous_visitors() {
    let app = TestApp::new().await;

    let response = app.post_logout().await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/");
}
