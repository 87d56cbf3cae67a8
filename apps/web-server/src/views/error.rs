use super::{layout, text};

/// Error page. Carries no header: it is rendered without session context.
pub fn render(status: u16, title: &str, detail: &str) -> String {
    let body = format!(
        r#"<h1>{title}</h1><p class="notice">{detail}</p><p class="notice">Error {status}</p><p><a class="button" href="/">Back to home</a></p>"#,
        title = text(title),
        detail = text(detail),
    );
    layout::page(title, None, &body)
}
