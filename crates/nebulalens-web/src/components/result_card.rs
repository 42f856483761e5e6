//! Consensus label plus per-model breakdown.

use nebulalens_common::{ModelAgreement, OrderedMap};

use super::esc;

/// Mutually exclusive card states, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView {
    Analyzing,
    AwaitingInput,
    Full,
}

pub fn result_view(
    predictions: Option<&OrderedMap<String>>,
    agreement: Option<&ModelAgreement>,
    is_loading: bool,
) -> ResultView {
    if is_loading {
        ResultView::Analyzing
    } else if predictions.is_none() || agreement.is_none() {
        ResultView::AwaitingInput
    } else {
        ResultView::Full
    }
}

pub fn render_result_card(
    predictions: Option<&OrderedMap<String>>,
    agreement: Option<&ModelAgreement>,
    is_loading: bool,
) -> String {
    let (predictions, agreement) = match (result_view(predictions, agreement, is_loading), predictions, agreement) {
        (ResultView::Full, Some(p), Some(a)) => (p, a),
        (ResultView::Analyzing, _, _) => {
            return r#"<div class="card result-card centered" data-view="analyzing">
    <h2 class="text-muted">Analyzing...</h2>
</div>"#
                .to_string()
        }
        _ => {
            return r#"<div class="card result-card centered" data-view="awaiting">
    <h2>Prediction Result</h2>
    <p class="text-muted">Enter parameters to see results.</p>
</div>"#
                .to_string()
        }
    };

    let pills: String = predictions
        .iter()
        .map(|(model, label)| {
            format!(
                r#"<div class="model-pill"><span class="pill-model">{}</span><span class="pill-label">{}</span></div>"#,
                esc(&model.to_uppercase()),
                esc(label)
            )
        })
        .collect();

    format!(
        r#"<div class="card result-card" data-view="full">
    <h2>Consensus Result</h2>
    <p class="text-muted"><strong>{} out of {}</strong> models agree.</p>
    <div class="consensus-label">{}</div>
    <h3 class="breakdown-title">Model Breakdown</h3>
    <div class="pill-grid">{}</div>
</div>"#,
        agreement.count,
        agreement.total,
        esc(&agreement.prediction),
        pills
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictions() -> OrderedMap<String> {
        [("rf", "A"), ("mlp", "A"), ("svm", "B"), ("knn", "A")]
            .into_iter()
            .map(|(m, l)| (m, l.to_string()))
            .collect()
    }

    fn agreement() -> ModelAgreement {
        ModelAgreement { prediction: "A".into(), count: 3, total: 4 }
    }

    #[test]
    fn test_loading_wins_over_everything() {
        let p = predictions();
        let a = agreement();
        assert_eq!(result_view(Some(&p), Some(&a), true), ResultView::Analyzing);
        assert_eq!(result_view(None, None, true), ResultView::Analyzing);
        assert!(render_result_card(Some(&p), Some(&a), true).contains("Analyzing..."));
    }

    #[test]
    fn test_missing_predictions_awaits_input() {
        let a = agreement();
        assert_eq!(result_view(None, Some(&a), false), ResultView::AwaitingInput);
        let html = render_result_card(None, None, false);
        assert!(html.contains("Enter parameters to see results."));
    }

    #[test]
    fn test_full_view_lists_every_model() {
        let p = predictions();
        let a = agreement();
        let html = render_result_card(Some(&p), Some(&a), false);
        assert!(html.contains("<strong>3 out of 4</strong> models agree."));
        assert!(html.contains(r#"<div class="consensus-label">A</div>"#));
        assert_eq!(html.matches("model-pill").count(), 4);
        assert!(html.contains(r#"<span class="pill-model">SVM</span><span class="pill-label">B</span>"#));
    }

    #[test]
    fn test_labels_are_escaped() {
        let p: OrderedMap<String> = [("rf", "<b>x</b>".to_string())].into_iter().collect();
        let a = ModelAgreement { prediction: "<b>x</b>".into(), count: 1, total: 1 };
        let html = render_result_card(Some(&p), Some(&a), false);
        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
