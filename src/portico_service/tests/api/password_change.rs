use crate::helpers::{PASSWORD, TestApp, get_with, location, new_client, post_login_with};

const NEW_PASSWORD: &str = "a-brand-new-phrase";

#[tokio::test]
async fn password_change_requires_login() {
    let app = TestApp::new().await;

    let response = app.get("/password_change/").await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(
        location(&response),
        "/accounts/login/?next=%2Fpassword_change%2F"
    );
}

#[tokio::test]
async fn wrong_old_password_is_a_form_error() {
    let app = TestApp::new().await;
    app.register_user().await;

    let response = app
        .post_password_change("not-my-password", NEW_PASSWORD, NEW_PASSWORD)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Your old password was entered incorrectly."));
}

#[tokio::test]
async fn password_change_rotates_credentials_and_sessions() {
    let app = TestApp::new().await;
    let username = app.register_user().await;

    // A second browser signed in as the same user.
    let other_browser = new_client();
    let response = post_login_with(&other_browser, &app.address, &username, PASSWORD, None).await;
    assert_eq!(response.status().as_u16(), 302);

    let response = app
        .post_password_change(PASSWORD, NEW_PASSWORD, NEW_PASSWORD)
        .await;
    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/password_change/done/");

    // The browser that changed the password got a fresh session.
    assert_eq!(app.get("/password_change/done/").await.status().as_u16(), 200);
    assert_eq!(app.get_special().await.status().as_u16(), 200);

    // The other session ended.
    let special = get_with(&other_browser, &app.address, "/special/").await;
    assert_eq!(special.status().as_u16(), 302);

    // Only the new password authenticates.
    let browser = new_client();
    let old = post_login_with(&browser, &app.address, &username, PASSWORD, None).await;
    assert_eq!(old.status().as_u16(), 200);
    let new = post_login_with(&browser, &app.address, &username, NEW_PASSWORD, None).await;
    assert_eq!(new.status().as_u16(), 302);
}
