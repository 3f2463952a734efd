//! Shell flows against a mock backend.

use std::sync::Arc;
use todo_client::{ClientConfig, TodoClient};
use todo_shell::views::FormField;
use todo_shell::{App, Flow, Screen};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "a@b.com"
    })
}

fn app_for(server: &MockServer, start: &str) -> App {
    let client = TodoClient::new(ClientConfig::new(format!("{}/api", server.uri()))).unwrap();
    App::with_client(Arc::new(client), start)
}

async fn no_session(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Not authenticated"
        })))
        .mount(server)
        .await;
}

async fn run(app: &mut App, lines: &[&str]) {
    for line in lines {
        assert_eq!(app.handle_line(line).await.unwrap(), Flow::Continue, "{}", line);
    }
}

#[tokio::test]
async fn test_home_redirects_to_login_without_session() {
    let server = MockServer::start().await;
    no_session(&server).await;

    let app = app_for(&server, "/");
    assert_eq!(app.screen(), Screen::Loading);

    app.mount().await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.history().location(), "/login");
    assert!(app.render().contains("Sign in"));
}

#[tokio::test]
async fn test_existing_session_skips_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "user": user_json() })),
        )
        .mount(&server)
        .await;

    let app = app_for(&server, "/signup");
    app.mount().await;

    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.history().location(), "/");
    assert!(app.render().contains("Welcome, Ada!"));
}

#[tokio::test]
async fn test_login_then_board_then_logout() {
    let server = MockServer::start().await;
    no_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "ok",
            "user": user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Logged out successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server, "/login");
    app.mount().await;

    run(&mut app, &["set email a@b.com", "set password secret123", "submit"]).await;

    assert_eq!(app.screen(), Screen::Home);
    assert!(app.session().is_authenticated());

    run(&mut app, &["add tomorrow  Call the bank ", "toggle 1", "section today"]).await;

    let rendered = app.render();
    assert!(rendered.contains("Today (3)"));
    assert!(rendered.contains("[x] #1 Database create for company"));
    assert_eq!(app.board().tasks(todo_shell::views::TaskList::Tomorrow).len(), 3);

    run(&mut app, &["logout"]).await;

    // shown before the backend call goes out
    assert!(app.is_busy());
    assert!(app.render().contains("Signing out..."));
    assert!(app.session().is_authenticated());

    // a second click while signing out is ignored
    run(&mut app, &["logout"]).await;

    app.settle().await;

    assert!(!app.is_busy());
    assert!(app.session().user().is_none());
    assert_eq!(app.screen(), Screen::Login);
}

#[tokio::test]
async fn test_invalid_login_shows_banner() {
    let server = MockServer::start().await;
    no_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server, "/login");
    app.mount().await;

    run(&mut app, &["set email a@b.com", "set password nope", "submit"]).await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(
        app.login_form().errors().banner(),
        Some("Invalid email or password")
    );
    assert!(app.render().contains("! Invalid email or password"));
}

#[tokio::test]
async fn test_signup_validation_errors_land_on_fields() {
    let server = MockServer::start().await;
    no_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Validation failed",
            "errors": {
                "email": ["has already been taken"],
                "nickname": ["is reserved"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server, "/signup");
    app.mount().await;

    run(
        &mut app,
        &[
            "set first Ada",
            "set last Lovelace",
            "set email a@b.com",
            "set password secret123",
            "set confirm secret123",
            "submit",
        ],
    )
    .await;

    let errors = app.signup_form().errors();
    assert_eq!(errors.field(FormField::Email), Some("has already been taken"));
    assert!(errors.banner().is_none());
    assert!(!app.render().contains("is reserved"));
    assert_eq!(app.screen(), Screen::Signup);
}

#[tokio::test]
async fn test_signup_success_moves_to_login_with_notice() {
    let server = MockServer::start().await;
    no_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "a@b.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "Account created successfully",
            "user": user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server, "/signup");
    app.mount().await;

    run(
        &mut app,
        &[
            "set first Ada",
            "set last Lovelace",
            "set email a@b.com",
            "set password secret123",
            "set confirm secret123",
            "submit",
        ],
    )
    .await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.notice(), Some("Account created successfully"));
    assert!(app.render().starts_with("Account created successfully"));
    // signing up does not sign in
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_commands_outside_their_page_fail() {
    let server = MockServer::start().await;
    no_session(&server).await;

    let mut app = app_for(&server, "/login");
    app.mount().await;

    assert!(app.handle_line("add today Buy milk").await.is_err());
    assert!(app.handle_line("set first Ada").await.is_err());
    assert!(app.handle_line("show confirm").await.is_err());
    assert_eq!(app.handle_line("").await.unwrap(), Flow::Continue);
    assert_eq!(app.handle_line("quit").await.unwrap(), Flow::Quit);
}
