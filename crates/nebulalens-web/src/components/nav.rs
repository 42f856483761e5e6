//! Top navigation bar.

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Models", "/models"),
    ("Visualizer", "/visualizer"),
    ("About", "/about"),
];

pub fn nav_html(active_path: &str) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(label, path)| {
            let class = if *path == active_path { "nav-link active" } else { "nav-link" };
            format!(r#"<a href="{}" class="{}">{}</a>"#, path, class, label)
        })
        .collect();

    format!(
        r#"<nav class="navbar">
    <div class="brand">NebulaLens</div>
    <div class="nav-links">{}</div>
</nav>"#,
        links
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_current_path_is_active() {
        let html = nav_html("/visualizer");
        assert!(html.contains(r#"<a href="/visualizer" class="nav-link active">Visualizer</a>"#));
        assert!(html.contains(r#"<a href="/" class="nav-link">Home</a>"#));
        assert_eq!(html.matches("active").count(), 1);
    }
}
