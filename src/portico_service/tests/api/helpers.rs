use fake::{Fake, faker::internet::en::Username as FakeUsername};
use portico_adapters::{
    config::Settings,
    persistence::{HashMapSessionStore, HashMapUserStore},
};
use portico_core::{UserStore, Username};
use portico_service::WebService;
use reqwest::{Client, Response, redirect::Policy};
use tokio::net::TcpListener;

pub const PASSWORD: &str = "correct-horse-battery";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub user_store: HashMapUserStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let settings = Settings::for_tests();
        let user_store = HashMapUserStore::new();

        let listener = TcpListener::bind(settings.application.address())
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = WebService::new(user_store.clone(), HashMapSessionStore::new(), settings);

        // Run the service in a separate async task
        // to avoid blocking the main test thread.
        tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            http_client: new_client(),
            user_store,
        }
    }

    /// A second browser: own cookie jar, same server.
    pub fn new_browser(&self) -> Client {
        new_client()
    }

    pub async fn get(&self, path: &str) -> Response {
        get_with(&self.http_client, &self.address, path).await
    }

    pub async fn get_home(&self) -> Response {
        self.get("/").await
    }

    pub async fn get_special(&self) -> Response {
        self.get("/special/").await
    }

    pub async fn post_register(&self, username: &str, password1: &str, password2: &str) -> Response {
        self.post(
            "/register/",
            &[
                ("username", username),
                ("password1", password1),
                ("password2", password2),
            ],
        )
        .await
    }

    pub async fn post_login(&self, username: &str, password: &str, next: Option<&str>) -> Response {
        post_login_with(&self.http_client, &self.address, username, password, next).await
    }

    pub async fn post_logout(&self) -> Response {
        self.post("/accounts/logout/", &[]).await
    }

    pub async fn post_password_change(
        &self,
        old_password: &str,
        new_password1: &str,
        new_password2: &str,
    ) -> Response {
        self.post(
            "/password_change/",
            &[
                ("old_password", old_password),
                ("new_password1", new_password1),
                ("new_password2", new_password2),
            ],
        )
        .await
    }

    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register a fresh user through the form and return their username.
    /// The app's browser is left signed in as that user.
    pub async fn register_user(&self) -> String {
        let username = random_username();
        let response = self.post_register(&username, PASSWORD, PASSWORD).await;
        assert_eq!(response.status().as_u16(), 302);
        username
    }

    pub async fn user_exists(&self, username: &str) -> bool {
        let username = Username::try_from(username).unwrap();
        self.user_store.get_user(&username).await.is_ok()
    }
}

pub fn new_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .unwrap()
}

pub async fn get_with(client: &Client, address: &str, path: &str) -> Response {
    client
        .get(format!("{}{}", address, path))
        .send()
        .await
        .expect("Failed to execute request.")
}

pub async fn post_login_with(
    client: &Client,
    address: &str,
    username: &str,
    password: &str,
    next: Option<&str>,
) -> Response {
    client
        .post(format!("{}/accounts/login/", address))
        .form(&[
            ("username", username),
            ("password", password),
            ("next", next.unwrap_or_default()),
        ])
        .send()
        .await
        .expect("Failed to execute request.")
}

pub fn random_username() -> String {
    let username: String = FakeUsername().fake();
    // Fake usernames may contain characters outside the allowed set.
    username
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || "_.@+-".contains(*c))
        .collect::<String>()
        + "_test"
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("No Location header")
        .to_str()
        .unwrap()
}
