use crate::helpers::{TestApp, location};

#[tokio::test]
async fn special_redirects_anonymous_visitors_to_login() {
    let app = TestApp::new().await;

    let response = app.get_special().await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/accounts/login/?next=%2Fspecial%2F");
}

#[tokio::test]
async fn special_is_served_with_a_valid_session() {
    let app = TestApp::new().await;
    let username = app.register_user().await;

    let response = app.get_special().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<h1>Special</h1>"));
    assert!(body.contains(&username));
}

#[tokio::test]
async fn forged_session_cookie_is_anonymous() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/special/", app.address))
        .header(reqwest::header::COOKIE, "sessionid=0123456789abcdef0123456789abcdef")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 302);
}
