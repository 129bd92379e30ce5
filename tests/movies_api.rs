//! HTTP-level tests for `/movies/`, driven through the router with
//! `tower::ServiceExt` and no TCP listener.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use common::{body_bytes, body_json, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn create_then_filter_by_genre_matches_published_shape() {
    let app = common::build_test_app().await;

    let response = post_json(&app, "/genres/", json!({"name": "Drama"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        &app,
        "/movies/",
        json!({"title": "Arrival", "year": 2016, "rating": 8.0, "genre_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response).await.is_empty());

    let response = get(&app, "/movies/?genre_id=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{
            "id": 1,
            "title": "Arrival",
            "description": null,
            "trailer": null,
            "year": 2016,
            "rating": 8.0,
            "genre_id": 1,
        }])
    );
}

#[tokio::test]
async fn get_by_id_returns_every_published_field_but_director_id() {
    let app = common::build_test_app().await;
    post_json(&app, "/directors/", json!({"name": "Michael Mann"})).await;

    let input = json!({
        "title": "Heat",
        "description": "A group of professional bank robbers",
        "trailer": "https://example.com/heat",
        "year": 1995,
        "rating": 8.3,
        "director_id": 1,
    });
    assert_eq!(post_json(&app, "/movies/", input).await.status(), StatusCode::CREATED);

    let response = get(&app, "/movies/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let movie = body_json(response).await;
    assert_eq!(movie["title"], "Heat");
    assert_eq!(movie["description"], "A group of professional bank robbers");
    assert_eq!(movie["trailer"], "https://example.com/heat");
    assert_eq!(movie["year"], 1995);
    assert_eq!(movie["rating"], 8.3);
    assert_eq!(movie["genre_id"], json!(null));
    assert!(movie.get("director_id").is_none());
}

#[tokio::test]
async fn listing_filters_intersect() {
    let app = common::build_test_app().await;
    for name in ["Villeneuve", "Mann"] {
        post_json(&app, "/directors/", json!({"name": name})).await;
    }
    for name in ["Sci-Fi", "Crime"] {
        post_json(&app, "/genres/", json!({"name": name})).await;
    }
    for (title, director_id, genre_id) in
        [("Arrival", 1, 1), ("Sicario", 1, 2), ("Heat", 2, 2), ("Blade Runner 2049", 1, 1)]
    {
        let body = json!({"title": title, "director_id": director_id, "genre_id": genre_id});
        assert_eq!(post_json(&app, "/movies/", body).await.status(), StatusCode::CREATED);
    }

    let titles = |uri: &'static str| {
        let app = app.clone();
        async move {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            body_json(response)
                .await
                .as_array()
                .unwrap()
                .iter()
                .map(|m| m["title"].as_str().unwrap().to_string())
                .collect::<Vec<_>>()
        }
    };

    assert_eq!(titles("/movies/").await.len(), 4);
    assert_eq!(titles("/movies/?director_id=1").await, [
        "Arrival",
        "Sicario",
        "Blade Runner 2049"
    ]);
    assert_eq!(titles("/movies/?genre_id=2").await, ["Sicario", "Heat"]);
    assert_eq!(titles("/movies/?director_id=1&genre_id=2").await, ["Sicario"]);
    assert!(titles("/movies/?director_id=2&genre_id=1").await.is_empty());
    assert!(titles("/movies/?director_id=99").await.is_empty());
}

#[tokio::test]
async fn non_integer_filter_is_bad_request() {
    let app = common::build_test_app().await;
    let response = get(&app, "/movies/?genre_id=drama").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn empty_filter_value_is_bad_request() {
    let app = common::build_test_app().await;
    post_json(&app, "/movies/", json!({"title": "Alien"})).await;

    for uri in ["/movies/?director_id=", "/movies/?genre_id="] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn missing_movie_is_404_with_empty_body() {
    let app = common::build_test_app().await;

    let response = get(&app, "/movies/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    let response = get(&app, "/movies/not-a-number").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
    let app = common::build_test_app().await;
    post_json(&app, "/movies/", json!({"title": "Solaris"})).await;

    assert_eq!(delete(&app, "/movies/1").await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(&app, "/movies/1").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, "/movies/1").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_fields_are_ignored_and_not_echoed() {
    let app = common::build_test_app().await;
    let body = json!({"id": 77, "title": "Stalker", "budget": 1_000_000, "language": "ru"});
    assert_eq!(post_json(&app, "/movies/", body).await.status(), StatusCode::CREATED);

    let movie = body_json(get(&app, "/movies/1").await).await;
    assert_eq!(movie["id"], 1);
    assert_eq!(movie["title"], "Stalker");
    assert!(movie.get("budget").is_none());
    assert!(movie.get("language").is_none());
    assert_eq!(get(&app, "/movies/77").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dangling_references_are_rejected() {
    let app = common::build_test_app().await;

    let response = post_json(&app, "/movies/", json!({"title": "Ghost", "genre_id": 5})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());

    let response = post_json(&app, "/movies/", json!({"title": "Ghost", "director_id": 5})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(body_json(get(&app, "/movies/").await).await, json!([]));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = common::build_test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/movies/")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let response = common::send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());

    let response = post_json(&app, "/movies/", json!({"year": "nineteen"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request =
        Request::builder().method(Method::POST).uri("/movies/").body(Body::from("{}")).unwrap();
    assert_eq!(common::send(&app, request).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_updates_only_supplied_fields() {
    let app = common::build_test_app().await;
    post_json(&app, "/movies/", json!({"title": "Dune", "year": 2021, "rating": 8.0})).await;

    let response = put_json(&app, "/movies/1", json!({"rating": 8.1})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let movie = body_json(get(&app, "/movies/1").await).await;
    assert_eq!(movie["title"], "Dune");
    assert_eq!(movie["year"], 2021);
    assert_eq!(movie["rating"], 8.1);

    assert_eq!(
        put_json(&app, "/movies/9", json!({"rating": 1.0})).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        put_json(&app, "/movies/1", json!({"genre_id": 3})).await.status(),
        StatusCode::BAD_REQUEST
    );
}
