//! Chart.js configurations for the visualizer page.

use nebulalens_common::reference::REFERENCE_PERFORMANCE;
use nebulalens_common::ChartSeries;
use serde_json::{json, Value};

pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

const PALETTE: [(u8, u8, u8); 4] = [(236, 72, 153), (59, 130, 246), (16, 185, 129), (234, 179, 8)];
const ACCENT: (u8, u8, u8) = (234, 179, 8);
const BLUE: (u8, u8, u8) = (59, 130, 246);

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

fn title(text: &str) -> Value {
    json!({
        "display": true,
        "text": text,
        "color": "rgba(255, 255, 255, 0.9)",
        "font": { "size": 18 }
    })
}

fn axis() -> Value {
    json!({
        "ticks": { "color": "rgba(255, 255, 255, 0.7)" },
        "grid": { "color": "rgba(255, 255, 255, 0.1)" }
    })
}

/// Accuracy / precision / recall / F1 profile per model, zoomed to 0.8..1.0.
pub fn radar_chart_config() -> Value {
    let datasets: Vec<Value> = REFERENCE_PERFORMANCE
        .iter()
        .enumerate()
        .map(|(i, model)| {
            let color = PALETTE[i % PALETTE.len()];
            let m = model.metrics;
            json!({
                "label": model.label,
                "data": [
                    m.accuracy,
                    m.precision.unwrap_or(0.0),
                    m.recall.unwrap_or(0.0),
                    m.f1_score
                ],
                "backgroundColor": rgba(color, 0.2),
                "borderColor": rgba(color, 1.0),
                "borderWidth": 2
            })
        })
        .collect();

    json!({
        "type": "radar",
        "data": {
            "labels": ["Accuracy", "Precision", "Recall", "F1-Score"],
            "datasets": datasets
        },
        "options": {
            "responsive": true,
            "plugins": {
                "legend": { "position": "top", "labels": { "color": "rgba(255, 255, 255, 0.8)" } },
                "title": title("Model Profile Comparison")
            },
            "scales": {
                "r": {
                    "angleLines": { "color": "rgba(255, 255, 255, 0.2)" },
                    "grid": { "color": "rgba(255, 255, 255, 0.2)" },
                    "pointLabels": { "color": "rgba(255, 255, 255, 0.8)", "font": { "size": 12 } },
                    "ticks": { "color": "rgba(255, 255, 255, 0.7)", "backdropColor": "rgba(0, 0, 0, 0.5)", "stepSize": 0.1 },
                    "min": 0.8,
                    "max": 1.0
                }
            }
        }
    })
}

/// Grouped accuracy and F1 bars, one group per model.
pub fn performance_chart_config() -> Value {
    let labels: Vec<&str> = REFERENCE_PERFORMANCE.iter().map(|m| m.key).collect();
    let accuracy: Vec<f64> = REFERENCE_PERFORMANCE.iter().map(|m| m.metrics.accuracy).collect();
    let f1: Vec<f64> = REFERENCE_PERFORMANCE.iter().map(|m| m.metrics.f1_score).collect();

    let mut y = axis();
    y["beginAtZero"] = json!(true);
    y["max"] = json!(1.0);

    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [
                { "label": "Accuracy", "data": accuracy, "backgroundColor": rgba(BLUE, 0.7) },
                { "label": "F1-Score", "data": f1, "backgroundColor": rgba(ACCENT, 0.7) }
            ]
        },
        "options": {
            "responsive": true,
            "plugins": {
                "legend": { "position": "top", "labels": { "color": "rgba(255, 255, 255, 0.8)" } },
                "title": title("Model Performance Comparison (Test Set)")
            },
            "scales": { "y": y, "x": axis() }
        }
    })
}

/// Horizontal bars of feature weights.
pub fn importance_chart_config(series: &ChartSeries) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "Feature Importance (from Random Forest)",
                "data": series.values,
                "backgroundColor": rgba(ACCENT, 0.7),
                "borderColor": rgba(ACCENT, 1.0),
                "borderWidth": 1
            }]
        },
        "options": {
            "indexAxis": "y",
            "responsive": true,
            "plugins": {
                "legend": { "display": false },
                "title": title("Which Features Matter Most?")
            },
            "scales": { "y": axis(), "x": axis() }
        }
    })
}

/// JSON for embedding inside a `<script>` element.
pub fn script_json(config: &Value) -> String {
    config.to_string().replace("</", "<\\/")
}
