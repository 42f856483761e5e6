//! Prediction history list.

use nebulalens_common::LogEntry;

use super::esc;

fn log_item(entry: &LogEntry) -> String {
    let features = entry.input_features.summary();
    format!(
        r#"
        <div class="log-item" data-id="{}">
            <div class="d-flex justify-between align-center">
                <div>
                    <span class="text-muted">Consensus Result</span>
                    <p class="log-consensus">{}</p>
                </div>
                <div class="text-right">
                    <span class="text-muted">Model Agreement</span>
                    <p class="log-agreement">{}</p>
                </div>
            </div>
            <p class="log-features" title="{}">{}</p>
            <small class="text-muted">{}</small>
        </div>"#,
        entry.id,
        esc(&entry.model_agreement.prediction),
        entry.model_agreement.ratio_label(),
        features,
        features,
        entry.recorded_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Empty history renders nothing at all.
pub fn render_prediction_log(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let items: String = entries.iter().map(log_item).collect();
    format!(
        r#"<section class="prediction-log">
    <h2 class="section-title">Prediction History</h2>
    <div class="log-list">{}</div>
</section>"#,
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebulalens_common::{CosmicFeatures, ModelAgreement};

    fn entry(count: u32) -> LogEntry {
        LogEntry::new(
            ModelAgreement { prediction: "GALAXY".into(), count, total: 4 },
            CosmicFeatures { u: 19.1, g: 17.25, r: 16.0, i: 15.5, z: 15.0, redshift: 0.0812 },
        )
    }

    #[test]
    fn test_empty_log_renders_nothing() {
        assert_eq!(render_prediction_log(&[]), "");
    }

    #[test]
    fn test_one_item_per_entry_with_ratio() {
        let entries = vec![entry(4), entry(2), entry(3)];
        let html = render_prediction_log(&entries);
        assert_eq!(html.matches(r#"class="log-item""#).count(), 3);
        assert!(html.contains(r#"<p class="log-agreement">4 / 4</p>"#));
        assert!(html.contains(r#"<p class="log-agreement">2 / 4</p>"#));
        assert!(html.contains("u: 19.10, g: 17.25, r: 16.00, i: 15.50, z: 15.00, redshift: 0.08"));
    }

    #[test]
    fn test_entries_render_in_insertion_order() {
        let entries = vec![entry(1), entry(2)];
        let html = render_prediction_log(&entries);
        let first = html.find("1 / 4").unwrap();
        let second = html.find("2 / 4").unwrap();
        assert!(first < second);
    }
}
