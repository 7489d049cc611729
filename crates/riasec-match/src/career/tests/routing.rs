use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::career::domain::Dimension;
use crate::career::router::{submit_handler, ScoreRequest};
use crate::career::scoring::MatchingEngine;
use crate::career::{sample_professions, CareerMatchingService};

fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn questions_route_lists_catalog() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/career-matching/questions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let questions = body.as_array().expect("array payload");
    assert_eq!(questions.len(), 36);
    assert_eq!(questions[0]["dimension"], "R");
    assert_eq!(questions[0]["dimension_name"], "Realistic");
}

#[tokio::test]
async fn score_route_returns_profile_and_matches() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let answers = answers_favoring(Dimension::Artistic);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/career-matching/score",
            json!({ "answers": answers, "limit": 2 }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["holland_code"], "A");
    assert_eq!(body["profile"]["A"], 24);
    assert_eq!(body["dimensions"][0]["dimension"], "A");
    assert_eq!(body["matches"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["matches"][0]["name"], "Musician");
    assert_eq!(body["completion"]["percentage"], 100);
}

#[tokio::test]
async fn score_route_reports_missing_answers() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let mut answers = answers_favoring(Dimension::Social);
    answers[0] = None;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/career-matching/score",
            json!({ "answers": answers }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["missing"], json!([0]));
}

#[tokio::test]
async fn score_route_rejects_misaligned_sheets() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/career-matching/score",
            json!({ "answers": [4, 4, 4] }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "received 3 answers for 36 questions");
}

#[tokio::test]
async fn score_route_fails_when_no_questions_are_loaded() {
    let service = CareerMatchingService::new(
        MatchingEngine::new(Vec::new(), sample_professions()),
        Arc::new(MemoryRepository::default()),
        MATCH_LIMIT,
    );
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/career-matching/score",
            json!({ "answers": [] }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "no questions available to answer");
}

#[tokio::test]
async fn score_route_rejects_out_of_scale_answers() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/career-matching/score",
            json!({ "answers": [7] }),
        ))
        .await
        .expect("router responds");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn submitted_results_can_be_fetched_back() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let answers = answers_favoring(Dimension::Conventional);

    let created = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/career-matching/users/user-3/results",
            json!({ "answers": answers }),
        ))
        .await
        .expect("router responds");
    assert_eq!(created.status(), StatusCode::CREATED);

    let fetched = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/career-matching/users/user-3/results?limit=1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(fetched.status(), StatusCode::OK);
    let body = read_json_body(fetched).await;
    assert_eq!(body["user_id"], "user-3");
    assert_eq!(body["holland_code"], "C");
    assert_eq!(body["matches"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["matches"][0]["name"], "Accountant");
}

#[tokio::test]
async fn unknown_user_results_return_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/career-matching/users/ghost/results")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "profile not found");
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(CareerMatchingService::new(
        engine(),
        Arc::new(UnavailableRepository),
        MATCH_LIMIT,
    ));

    let response = submit_handler::<UnavailableRepository>(
        State(service),
        axum::extract::Path("user-5".to_string()),
        axum::Json(ScoreRequest {
            answers: answers_favoring(Dimension::Realistic),
            limit: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
