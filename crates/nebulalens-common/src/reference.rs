//! Test-set metrics published with the trained models. Used by the
//! visualizer and model pages, which render without calling the classifier.

use crate::prediction::ModelMetrics;

pub struct ReferenceModel {
    pub key: &'static str,
    pub label: &'static str,
    pub metrics: ModelMetrics,
}

const fn metrics(accuracy: f64, precision: f64, recall: f64, f1_score: f64) -> ModelMetrics {
    ModelMetrics { accuracy, f1_score, precision: Some(precision), recall: Some(recall) }
}

pub static REFERENCE_PERFORMANCE: [ReferenceModel; 4] = [
    ReferenceModel { key: "svm", label: "SVM",           metrics: metrics(0.92, 0.91, 0.92, 0.91) },
    ReferenceModel { key: "mlp", label: "MLP",           metrics: metrics(0.95, 0.94, 0.95, 0.94) },
    ReferenceModel { key: "knn", label: "KNN",           metrics: metrics(0.89, 0.88, 0.89, 0.88) },
    ReferenceModel { key: "rf",  label: "Random Forest", metrics: metrics(0.97, 0.97, 0.97, 0.97) },
];
