//! The six-field parameter form.

use nebulalens_common::{FeatureForm, FieldErrors, FEATURE_NAMES};

use super::esc;

fn field_label(name: &str) -> &str {
    match name {
        "u" => "u (ultraviolet)",
        "g" => "g (green)",
        "r" => "r (red)",
        "i" => "i (near infrared)",
        "z" => "z (infrared)",
        "redshift" => "Redshift",
        other => other,
    }
}

pub fn render_parameter_form(form: &FeatureForm, errors: Option<&FieldErrors>, is_loading: bool) -> String {
    let fields: String = FEATURE_NAMES
        .iter()
        .map(|name| {
            let error = errors.and_then(|e| e.get(name));
            let error_html = error
                .map(|msg| format!(r#"<small class="field-error">{}</small>"#, esc(msg)))
                .unwrap_or_default();
            format!(
                r#"
        <div class="form-group{}">
            <label for="f-{name}">{}</label>
            <input type="number" step="any" id="f-{name}" name="{name}" class="form-control" value="{}" required>
            {}
        </div>"#,
                if error.is_some() { " has-error" } else { "" },
                field_label(name),
                esc(form.raw(name).unwrap_or("")),
                error_html,
                name = name,
            )
        })
        .collect();

    format!(
        r#"<div class="card">
    <div class="card-header">Object Parameters</div>
    <form method="POST" action="/predict" class="parameter-form">
        {}
        <button type="submit" class="btn btn-primary w-100"{}>{}</button>
    </form>
</div>"#,
        fields,
        if is_loading { " disabled" } else { "" },
        if is_loading { "Analyzing..." } else { "Predict Class" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_six_inputs_with_values_and_errors() {
        let form = FeatureForm { u: Some("19.5".into()), ..FeatureForm::default() };
        let errors = FieldErrors(vec![("g", "required".to_string())]);
        let html = render_parameter_form(&form, Some(&errors), false);

        assert_eq!(html.matches(r#"<input type="number""#).count(), 6);
        assert!(html.contains(r#"name="u" class="form-control" value="19.5""#));
        assert!(html.contains(r#"<small class="field-error">required</small>"#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_submit_disabled_while_loading() {
        let html = render_parameter_form(&FeatureForm::default(), None, true);
        assert!(html.contains(" disabled>Analyzing...</button>"));
    }
}
