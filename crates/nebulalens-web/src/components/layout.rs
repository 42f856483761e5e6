//! Page shell shared by every route.

use minijinja::{context, Environment, Value};
use std::sync::OnceLock;

use super::nav::nav_html;

const LAYOUT: &str = include_str!("../../templates/layout.html");

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        if let Err(e) = env.add_template("layout.html", LAYOUT) {
            tracing::error!(error = %e, "layout template failed to compile");
        }
        env
    })
}

/// Everything a page contributes to the shell.
pub struct Page<'a> {
    pub title: &'a str,
    pub active_path: &'a str,
    /// Pre-rendered, already escaped markup.
    pub body: String,
    /// Trusted URLs, inserted unescaped.
    pub script_srcs: &'a [&'a str],
    pub script: Option<String>,
}

pub fn render_page(page: Page<'_>) -> String {
    let ctx = context! {
        title => page.title,
        nav => Value::from_safe_string(nav_html(page.active_path)),
        body => Value::from_safe_string(page.body.clone()),
        script_srcs => page.script_srcs
            .iter()
            .map(|src| Value::from_safe_string(src.to_string()))
            .collect::<Vec<_>>(),
        script => page.script.map(Value::from_safe_string),
    };

    match environment()
        .get_template("layout.html")
        .and_then(|tmpl| tmpl.render(ctx))
    {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(error = %e, title = page.title, "page render failed");
            format!("<!DOCTYPE html><html><body>{}</body></html>", page.body)
        }
    }
}
