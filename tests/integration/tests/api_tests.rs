//! API Integration Tests
//!
//! Each test spawns the server on an ephemeral port with a fresh in-memory
//! store and drives it over HTTP.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, film_ids, fixtures::*, user_ids, TestServer,
};
use reqwest::StatusCode;

async fn create_user(server: &TestServer, login: &str) -> UserResponse {
    let response = server.post("/users", &UserBody::new(login)).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_film(server: &TestServer, body: &FilmBody) -> FilmResponse {
    let response = server.post("/films", body).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn expect_error(response: reqwest::Response, status: StatusCode) -> ErrorResponse {
    let error: ErrorResponse = assert_json(response, status).await.unwrap();
    assert!(!error.error.is_empty());
    assert!(!error.description.is_empty());
    error
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let user = create_user(&server, "dolore").await;
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "dolore@mail.ru");
    assert_eq!(user.birthday.as_deref(), Some("1946-08-20"));
    assert!(user.friends.is_empty());

    let response = server.get("/users/1").await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, user);

    let response = server.get("/users").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user_ids(&users), vec![1]);
}

#[tokio::test]
async fn test_blank_name_falls_back_to_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut body = UserBody::new("common");
    body.name = Some(String::new());
    let response = server.post("/users", &body).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.name, "common");
}

#[tokio::test]
async fn test_create_user_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut bad_login = UserBody::new("dolore");
    bad_login.login = "dolore ullamco".to_string();
    let response = server.post("/users", &bad_login).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let mut bad_email = UserBody::new("dolore");
    bad_email.email = "mail.ru".to_string();
    let response = server.post("/users", &bad_email).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let mut future = UserBody::new("dolore");
    future.birthday = Some("2446-08-20".to_string());
    let response = server.post("/users", &future).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let response = server.get("/users").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_update_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    create_user(&server, "dolore").await;

    let mut body = UserBody::new("doloreUpdate").with_id(1);
    body.name = Some("est adipisicing".to_string());
    let response = server.put("/users", &body).await.unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.login, "doloreUpdate");
    assert_eq!(updated.name, "est adipisicing");

    let response = server.put("/users", &UserBody::new("x").with_id(9999)).await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;

    let response = server.put("/users", &UserBody::new("x")).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_unknown_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/-1").await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;

    let response = server.get("/users/abc").await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;
}

// ============================================================================
// Friendship Tests
// ============================================================================

#[tokio::test]
async fn test_friendship_is_mutual() {
    let server = TestServer::start().await.expect("Failed to start server");
    create_user(&server, "first").await;
    create_user(&server, "second").await;

    let response = server.put_empty("/users/1/friends/2").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/users/1/friends").await.unwrap();
    let friends: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user_ids(&friends), vec![2]);

    let response = server.get("/users/2/friends").await.unwrap();
    let friends: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user_ids(&friends), vec![1]);

    let response = server.delete("/users/2/friends/1").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.delete("/users/2/friends/1").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/users/1/friends").await.unwrap();
    let friends: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(friends.is_empty());
}

#[tokio::test]
async fn test_friendship_errors() {
    let server = TestServer::start().await.expect("Failed to start server");
    create_user(&server, "first").await;

    let response = server.put_empty("/users/1/friends/1").await.unwrap();
    let error = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error.error, "SELF_FRIENDSHIP");

    let response = server.put_empty("/users/1/friends/-1").await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;

    let response = server.get("/users/42/friends").await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_remove_self_friendship_is_ok() {
    let server = TestServer::start().await.expect("Failed to start server");
    create_user(&server, "first").await;

    let response = server.delete("/users/1/friends/1").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete("/users/9/friends/9").await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_common_friends() {
    let server = TestServer::start().await.expect("Failed to start server");
    for login in ["first", "second", "third"] {
        create_user(&server, login).await;
    }

    server.put_empty("/users/1/friends/2").await.unwrap();
    server.put_empty("/users/1/friends/3").await.unwrap();

    let response = server.get("/users/2/friends/common/3").await.unwrap();
    let common: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user_ids(&common), vec![1]);

    server.put_empty("/users/2/friends/3").await.unwrap();

    let response = server.get("/users/1/friends/common/2").await.unwrap();
    let common: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user_ids(&common), vec![3]);

    let response = server.get("/users/1/friends").await.unwrap();
    let friends: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user_ids(&friends), vec![2, 3]);
}

// ============================================================================
// Film Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_film() {
    let server = TestServer::start().await.expect("Failed to start server");

    let film = create_film(&server, &FilmBody::new("nisi eiusmod").with_genres(&[2, 1, 2])).await;
    assert_eq!(film.id, 1);
    assert_eq!(film.release_date, "1967-03-25");
    assert_eq!(film.mpa, NamedRef { id: 1, name: "G".to_string() });
    assert_eq!(
        film.genres,
        vec![
            NamedRef { id: 1, name: "Comedy".to_string() },
            NamedRef { id: 2, name: "Drama".to_string() },
        ]
    );
    assert!(film.likes.is_empty());

    let response = server.get("/films/1").await.unwrap();
    let fetched: FilmResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, film);
}

#[tokio::test]
async fn test_create_film_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/films", &FilmBody::new("")).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let mut long = FilmBody::new("long");
    long.description = Some("a".repeat(201));
    let response = server.post("/films", &long).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let mut early = FilmBody::new("early");
    early.release_date = "1895-12-27".to_string();
    let response = server.post("/films", &early).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let mut boundary = FilmBody::new("boundary");
    boundary.release_date = "1895-12-28".to_string();
    create_film(&server, &boundary).await;

    let mut negative = FilmBody::new("negative");
    negative.duration = -200;
    let response = server.post("/films", &negative).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let mut unknown_mpa = FilmBody::new("mpa");
    unknown_mpa.mpa = IdRef { id: 99 };
    let response = server.post("/films", &unknown_mpa).await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;

    let response = server
        .post("/films", &FilmBody::new("genre").with_genres(&[42]))
        .await
        .unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_update_film_keeps_likes() {
    let server = TestServer::start().await.expect("Failed to start server");
    create_user(&server, "fan").await;
    create_film(&server, &FilmBody::new("Film").with_genres(&[1])).await;
    server.put_empty("/films/1/like/1").await.unwrap();

    let mut body = FilmBody::new("Film Updated").with_id(1).with_genres(&[]);
    body.mpa = IdRef { id: 5 };
    let response = server.put("/films", &body).await.unwrap();
    let updated: FilmResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "Film Updated");
    assert_eq!(updated.mpa.name, "NC-17");
    assert!(updated.genres.is_empty());
    assert_eq!(updated.likes, vec![1]);

    let response = server.put("/films", &FilmBody::new("x").with_id(9999)).await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;
}

// ============================================================================
// Like and Popularity Tests
// ============================================================================

#[tokio::test]
async fn test_like_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");
    create_user(&server, "first").await;
    create_user(&server, "second").await;
    create_film(&server, &FilmBody::new("Film")).await;

    server.put_empty("/films/1/like/1").await.unwrap();
    server.put_empty("/films/1/like/2").await.unwrap();

    let response = server.put_empty("/films/1/like/1").await.unwrap();
    let error = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error.error, "ALREADY_LIKED");

    let response = server.delete("/films/1/like/1").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete("/films/1/like/1").await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;

    let response = server.get("/films/popular?count=1").await.unwrap();
    let popular: Vec<FilmResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(film_ids(&popular), vec![1]);
    assert_eq!(popular[0].likes, vec![2]);
}

#[tokio::test]
async fn test_popular_films() {
    let server = TestServer::start().await.expect("Failed to start server");
    for login in ["first", "second"] {
        create_user(&server, login).await;
    }
    for name in ["One", "Two", "Three"] {
        create_film(&server, &FilmBody::new(name)).await;
    }

    server.put_empty("/films/3/like/1").await.unwrap();
    server.put_empty("/films/3/like/2").await.unwrap();
    server.put_empty("/films/2/like/1").await.unwrap();

    let response = server.get("/films/popular").await.unwrap();
    let popular: Vec<FilmResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(film_ids(&popular), vec![3, 2, 1]);

    let response = server.get("/films/popular?count=2").await.unwrap();
    let popular: Vec<FilmResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(film_ids(&popular), vec![3, 2]);

    let response = server.get("/films/popular?count=0").await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;

    let response = server.get("/films/popular?count=-5").await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST).await;
}

// ============================================================================
// Reference Data Tests
// ============================================================================

#[tokio::test]
async fn test_reference_data() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/mpa").await.unwrap();
    let ratings: Vec<NamedRef> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = ratings.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["G", "PG", "PG-13", "R", "NC-17"]);

    let response = server.get("/genres/6").await.unwrap();
    let genre: NamedRef = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(genre.name, "Action");

    let response = server.get("/genres/7").await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;

    let response = server.get("/mpa/6").await.unwrap();
    expect_error(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_malformed_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .client
        .post(format!("{}/films", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    let error = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error.error, "INVALID_BODY");
}
