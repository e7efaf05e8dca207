//! Integration tests running the client against a local mock endpoint.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};

use predict_client::{ClientError, PredictionClient};
use predict_core::{
    EndpointConfig, JobFormFields, PredictionPayload, PredictionValue, RequestShape,
};

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, shape: RequestShape) -> PredictionClient {
    PredictionClient::new(EndpointConfig {
        url: format!("http://{addr}/predict"),
        shape,
    })
}

fn job_payload() -> PredictionPayload {
    JobFormFields {
        company_name: "Tech Corp".into(),
        job_role: "Software Engineer".into(),
        job_description: "Build backend services".into(),
        salary: "85000".into(),
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn successful_response_is_parsed() {
    let router = Router::new().route(
        "/predict",
        post(|| async {
            Json(json!({
                "prediction": 0.8567,
                "confidence": 0.91,
                "details": {"years_experience": 5},
            }))
        }),
    );
    let addr = serve(router).await;

    let result = client_for(addr, RequestShape::JobPosting)
        .predict(&job_payload())
        .await
        .unwrap();

    assert_eq!(result.prediction, PredictionValue::Number(0.8567));
    assert_eq!(result.confidence, Some(0.91));
    assert_eq!(
        result.detail_rows(),
        vec![("years experience".to_string(), "5.0000".to_string())]
    );
}

#[tokio::test]
async fn request_body_matches_the_wire_contract() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let seen_in = seen.clone();

    let router = Router::new().route(
        "/predict",
        post(move |Json(body): Json<Value>| {
            let seen_in = seen_in.clone();
            async move {
                *seen_in.lock().unwrap() = Some(body);
                Json(json!({"prediction": 1.0}))
            }
        }),
    );
    let addr = serve(router).await;

    client_for(addr, RequestShape::JobPosting)
        .predict(&job_payload())
        .await
        .unwrap();

    let body = seen.lock().unwrap().take().unwrap();
    assert_eq!(
        body,
        json!({
            "company_name": "Tech Corp",
            "job_description": "Build backend services",
            "job_role": "Software Engineer",
            "salary": 85000.0,
        })
    );
}

#[tokio::test]
async fn feature_vector_shape_is_posted_as_features_array() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let seen_in = seen.clone();

    let router = Router::new().route(
        "/predict",
        post(move |Json(body): Json<Value>| {
            let seen_in = seen_in.clone();
            async move {
                *seen_in.lock().unwrap() = Some(body);
                Json(json!({"prediction": 0.25}))
            }
        }),
    );
    let addr = serve(router).await;

    let payload = PredictionPayload::Features {
        features: [0.5, 1.25, -3.0, 42.0],
    };
    client_for(addr, RequestShape::Features)
        .predict(&payload)
        .await
        .unwrap();

    let body = seen.lock().unwrap().take().unwrap();
    assert_eq!(body, json!({"features": [0.5, 1.25, -3.0, 42.0]}));
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let router = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    );
    let addr = serve(router).await;

    let err = client_for(addr, RequestShape::JobPosting)
        .predict(&job_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status { code: 500 }));
    assert_eq!(
        err.user_message(),
        "The prediction service returned HTTP 500."
    );
}

#[tokio::test]
async fn non_2xx_wins_over_body_parsing() {
    // A 404 with an HTML body must classify by status, not as a parse error.
    let router = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::NOT_FOUND, "<html>not here</html>") }),
    );
    let addr = serve(router).await;

    let err = client_for(addr, RequestShape::JobPosting)
        .predict(&job_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status { code: 404 }));
}

#[tokio::test]
async fn malformed_body_maps_to_parse() {
    let router = Router::new().route("/predict", post(|| async { "not json at all" }));
    let addr = serve(router).await;

    let err = client_for(addr, RequestShape::JobPosting)
        .predict(&job_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn missing_prediction_field_maps_to_parse() {
    let router = Router::new().route(
        "/predict",
        post(|| async { Json(json!({"confidence": 0.5})) }),
    );
    let addr = serve(router).await;

    let err = client_for(addr, RequestShape::JobPosting)
        .predict(&job_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_network() {
    // Grab a port that is free right now, then close it again.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr, RequestShape::JobPosting)
        .predict(&job_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.user_message(), "Unable to connect to the prediction API.");
}
