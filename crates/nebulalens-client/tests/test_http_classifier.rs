//! HttpClassifier against an in-process mock classification service.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use nebulalens_client::{Classifier, HttpClassifier};
use nebulalens_common::{CosmicFeatures, NebulaError};
use nebulalens_config::ClassifierConfig;
use serde_json::{json, Value};

async fn serve(app: Router) -> ClassifierConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ClassifierConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
        ..ClassifierConfig::default()
    }
}

fn sample_features() -> CosmicFeatures {
    CosmicFeatures { u: 1.0, g: 2.0, r: 3.0, i: 4.0, z: 5.0, redshift: 6.0 }
}

/// Raw body so the wire order is exactly as written: `performance` lists svm before rf.
const CONSENSUS_BODY: &str = r#"{
    "predictions": {"rf": "A", "mlp": "A", "svm": "B", "knn": "A"},
    "performance": {
        "svm": {"accuracy": 0.92, "precision": 0.91, "recall": 0.92, "f1_score": 0.91},
        "rf":  {"accuracy": 0.973, "precision": 0.97, "recall": 0.97, "f1_score": 0.97}
    },
    "model_agreement": {"prediction": "A", "count": 3, "total": 4},
    "input_features": {"u": 1.0, "g": 2.0, "r": 3.0, "i": 4.0, "z": 5.0, "redshift": 6.0}
}"#;

async fn consensus() -> Response {
    ([(header::CONTENT_TYPE, "application/json")], CONSENSUS_BODY).into_response()
}

#[tokio::test]
async fn test_predict_parses_consensus() {
    let config = serve(Router::new().route("/predict", post(consensus))).await;
    let client = HttpClassifier::new(&config).unwrap();

    let result = client.predict(&sample_features()).await.unwrap();
    assert_eq!(result.model_agreement.count, 3);
    assert!(result.model_agreement.count <= result.model_agreement.total);
    assert_eq!(result.model_agreement.total as usize, result.predictions.len());
    assert_eq!(result.predictions.get("svm").map(String::as_str), Some("B"));
    assert_eq!(result.predictions.keys().collect::<Vec<_>>(), vec!["rf", "mlp", "svm", "knn"]);
    assert_eq!(result.performance.keys().collect::<Vec<_>>(), vec!["svm", "rf"]);
}

#[tokio::test]
async fn test_predict_sends_all_six_features() {
    async fn check(Json(body): Json<Value>) -> Response {
        let complete = ["u", "g", "r", "i", "z", "redshift"]
            .iter()
            .all(|k| body.get(*k).map(Value::is_number).unwrap_or(false));
        if !complete {
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
        consensus().await
    }

    let config = serve(Router::new().route("/predict", post(check))).await;
    let client = HttpClassifier::new(&config).unwrap();
    assert!(client.predict(&sample_features()).await.is_ok());
}

#[tokio::test]
async fn test_predict_server_error_field() {
    let app = Router::new().route(
        "/predict",
        post(|| async { Json(json!({"error": "Models or Scaler are not loaded."})) }),
    );
    let client = HttpClassifier::new(&serve(app).await).unwrap();

    match client.predict(&sample_features()).await {
        Err(NebulaError::Server(msg)) => assert_eq!(msg, "Models or Scaler are not loaded."),
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_predict_inconsistent_agreement_is_malformed() {
    let app = Router::new().route(
        "/predict",
        post(|| async {
            Json(json!({
                "predictions": {"rf": "A"},
                "model_agreement": {"prediction": "A", "count": 1, "total": 4},
                "performance": {}
            }))
        }),
    );
    let client = HttpClassifier::new(&serve(app).await).unwrap();
    let err = client.predict(&sample_features()).await.unwrap_err();
    assert!(matches!(err, NebulaError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_predict_non_success_status() {
    let app = Router::new().route("/predict", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let client = HttpClassifier::new(&serve(app).await).unwrap();
    let err = client.predict(&sample_features()).await.unwrap_err();
    assert!(matches!(err, NebulaError::Status { status: 500 }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_predict_unreachable_service() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClassifierConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 2,
        ..ClassifierConfig::default()
    };
    let client = HttpClassifier::new(&config).unwrap();
    let err = client.predict(&sample_features()).await.unwrap_err();
    assert!(matches!(err, NebulaError::Http(_)));
}

#[tokio::test]
async fn test_feature_importance_order_and_error() {
    let app = Router::new().route(
        "/feature_importance",
        get(|| async { r#"{"redshift": 0.61, "g": 0.2, "u": 0.1}"# }),
    );
    let client = HttpClassifier::new(&serve(app).await).unwrap();
    let series = client.feature_importance().await.unwrap().chart_series();
    assert_eq!(series.labels, vec!["redshift", "g", "u"]);
    assert_eq!(series.values, vec![0.61, 0.2, 0.1]);

    let app = Router::new().route(
        "/feature_importance",
        get(|| async { Json(json!({"error": "Random Forest model not loaded."})) }),
    );
    let client = HttpClassifier::new(&serve(app).await).unwrap();
    let err = client.feature_importance().await.unwrap_err();
    assert_eq!(err.to_string(), "Random Forest model not loaded.");
}
