use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use crate::handlers::configure_routes;
use crate::state::AppState;

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr, $username:expr, $password:expr) => {{
        let resp = test::call_service(
            &$app,
            test::TestRequest::post()
                .uri("/signup/")
                .set_json(json!({"username": $username, "password": $password}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &$app,
            test::TestRequest::post()
                .uri("/login/")
                .set_json(json!({"username": $username, "password": $password}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        resp.response()
            .cookies()
            .next()
            .expect("login sets a session cookie")
            .into_owned()
    }};
}

#[actix_web::test]
async fn full_blog_lifecycle_scenario() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let alice = login!(app, "alice", "password-a");
    let bob = login!(app, "bob", "password-b");

    // alice creates a post
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/blogs")
            .cookie(alice.clone())
            .set_json(json!({"title": "T", "body": "B"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let alice_id = state
        .users
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap()
        .id;
    assert_eq!(created["author"], json!(alice_id));
    assert_eq!(created["edited"], json!(false));
    assert_eq!(created["last_edit"], Value::Null);

    let post_uri = format!("/blogs/{}", created["id"].as_str().unwrap());

    // alice edits the title; the body stays put
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&post_uri)
            .cookie(alice.clone())
            .set_json(json!({"title": "T2"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], json!("T2"));
    assert_eq!(updated["body"], json!("B"));
    assert_eq!(updated["edited"], json!(true));
    assert!(updated["last_edit"].is_string());

    // bob may neither edit nor delete alice's post
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&post_uri)
            .cookie(bob.clone())
            .set_json(json!({"title": "hijacked"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&post_uri)
            .cookie(bob.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // the failed attempts left the post unchanged
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&post_uri).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["title"], json!("T2"));

    // alice deletes her post; it is gone afterwards
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&post_uri)
            .cookie(alice.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&post_uri).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unauthenticated_create_is_rejected() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({"title": "T", "body": "B"}))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn duplicate_signup_fails_with_generic_message() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup/")
            .set_json(json!({"username": "alice", "password": "pw1"}))
            .to_request(),
    )
    .await;
    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first["success"], json!(true));
    assert!(first["user_id"].is_string());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup/")
            .set_json(json!({"username": "alice", "password": "pw2"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["success"], json!(false));
    assert_eq!(second["error"], json!("Unable to create user"));
}

#[actix_web::test]
async fn login_failures_are_indistinguishable() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let _alice = login!(app, "alice", "right-password");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/")
            .set_json(json!({"username": "alice", "password": "wrong-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let wrong_password: Value = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/")
            .set_json(json!({"username": "nobody", "password": "whatever"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let unknown_user: Value = test::read_body_json(resp).await;

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["success"], json!(false));
    assert_eq!(wrong_password["error"], json!("Invalid credentials"));
}

#[actix_web::test]
async fn logout_invalidates_the_session() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let alice = login!(app, "alice", "pw");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/logout/")
            .cookie(alice.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));

    // stale cookie no longer authenticates
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/blogs")
            .cookie(alice.clone())
            .set_json(json!({"title": "T", "body": "B"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // logging out with no session at all still succeeds
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/logout/").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn superuser_can_delete_any_post() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let alice = login!(app, "alice", "pw-a");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/blogs")
            .cookie(alice.clone())
            .set_json(json!({"title": "T", "body": "B"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let post_uri = format!("/blogs/{}", created["id"].as_str().unwrap());

    // promote admin before they log in, so the session captures the flag
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup/")
            .set_json(json!({"username": "admin", "password": "pw-s"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let mut admin = state
        .users
        .find_by_username("admin")
        .await
        .unwrap()
        .unwrap();
    admin.is_superuser = true;
    state.users.update(admin).await.unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/")
            .set_json(json!({"username": "admin", "password": "pw-s"}))
            .to_request(),
    )
    .await;
    let admin_cookie = resp
        .response()
        .cookies()
        .next()
        .expect("login sets a session cookie")
        .into_owned();

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&post_uri)
            .cookie(admin_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn overlong_title_is_a_bad_request() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let alice = login!(app, "alice", "pw");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/blogs")
            .cookie(alice)
            .set_json(json!({"title": "x".repeat(65), "body": "B"}))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn listing_and_fetching_are_public() {
    let state = AppState::in_memory();
    let app = test_app!(state);

    let alice = login!(app, "alice", "pw");

    for i in 0..2 {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/blogs")
                .cookie(alice.clone())
                .set_json(json!({"title": format!("Post {i}"), "body": "B"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // no cookie on the reads
    let resp = test::call_service(&app, test::TestRequest::get().uri("/blogs").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Value = test::read_body_json(resp).await;
    assert_eq!(posts.as_array().unwrap().len(), 2);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/blogs/{}", uuid::Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
