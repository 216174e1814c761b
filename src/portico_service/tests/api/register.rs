use crate::helpers::{PASSWORD, TestApp, location, random_username};

#[tokio::test]
async fn register_form_is_served() {
    let app = TestApp::new().await;

    let response = app.get("/register/").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains(r#"name="password2""#));
}

#[tokio::test]
async fn valid_registration_persists_user_signs_in_and_redirects_home() {
    let app = TestApp::new().await;
    let username = random_username();

    let response = app.post_register(&username, PASSWORD, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/");
    assert!(app.user_exists(&username).await);

    // The new session is live.
    assert_eq!(app.get_special().await.status().as_u16(), 200);
}

#[tokio::test]
async fn taken_username_rerenders_form_with_error() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_register(&username, PASSWORD, PASSWORD).await;

    let other_browser = app.new_browser();
    let response = other_browser
        .post(format!("{}/register/", app.address))
        .form(&[
            ("username", username.as_str()),
            ("password1", "another-long-phrase"),
            ("password2", "another-long-phrase"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
    let body = response.text().await.unwrap();
    assert!(body.contains("A user with that username already exists."));

    // The first registration still owns the account.
    let login = crate::helpers::post_login_with(
        &other_browser,
        &app.address,
        &username,
        "another-long-phrase",
        None,
    )
    .await;
    assert_eq!(login.status().as_u16(), 200);
}

#[tokio::test]
async fn mismatched_passwords_create_no_user_and_no_session() {
    let app = TestApp::new().await;
    let username = random_username();

    let response = app
        .post_register(&username, PASSWORD, "correct-horse-batterx")
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
    let body = response.text().await.unwrap();
    assert!(body.contains("The two password fields didn"));
    assert!(body.contains(&username));
    assert!(!app.user_exists(&username).await);
    assert_eq!(app.get_special().await.status().as_u16(), 302);
}

#[tokio::test]
async fn policy_violations_are_reported() {
    let app = TestApp::new().await;

    let response = app.post_register(&random_username(), "12345678", "12345678").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("This password is too common."));
    assert!(body.contains("This password is entirely numeric."));
}

#[tokio::test]
async fn same_invalid_submission_gives_same_outcome() {
    let app = TestApp::new().await;
    let username = random_username();

    let first = app.post_register(&username, "short", "shorter").await;
    let first_status = first.status().as_u16();
    let first_body = first.text().await.unwrap();

    let second = app.post_register(&username, "short", "shorter").await;
    let second_status = second.status().as_u16();
    let second_body = second.text().await.unwrap();

    assert_eq!(first_status, 200);
    assert_eq!(first_status, second_status);
    assert_eq!(first_body, second_body);
    assert!(!app.user_exists(&username).await);
}
