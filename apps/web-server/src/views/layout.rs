//! Page shell and the session-gated header.

use quill_core::domain::SessionView;

use super::{attr, text};

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2328; background: #f6f8fa; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #fff; border-bottom: 1px solid #d0d7de; }
header .brand { font-weight: 700; font-size: 1.25rem; color: inherit; text-decoration: none; }
header nav { display: flex; gap: .75rem; align-items: center; }
main { max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
.button { padding: .4rem .9rem; border: 1px solid #d0d7de; border-radius: 6px; background: #fff; color: inherit; text-decoration: none; cursor: pointer; font: inherit; }
.button.primary { background: #1f883d; border-color: #1f883d; color: #fff; }
.post-card { background: #fff; border: 1px solid #d0d7de; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
.post-card img.cover, article img.cover { max-width: 100%; border-radius: 6px; }
.byline { display: flex; gap: .5rem; align-items: center; color: #59636e; font-size: .9rem; }
.byline img { width: 24px; height: 24px; border-radius: 50%; }
.empty, .notice { color: #59636e; }
.error { color: #cf222e; }
form label { display: block; margin: .75rem 0 .25rem; }
form input[type=text], form input[type=url], form textarea { width: 100%; box-sizing: border-box; padding: .5rem; font: inherit; }
"#;

/// Header markup for the selected session state.
pub fn header(view: &SessionView) -> String {
    let nav = match view {
        SessionView::SignedOut {
            login_url,
            register_url,
        } => format!(
            r#"<a class="button" href="{}">Login</a><a class="button primary" href="{}">Sign Up</a>"#,
            attr(login_url),
            attr(register_url),
        ),
        SessionView::SignedIn {
            given_name,
            logout_url,
        } => format!(
            r#"<a class="button" href="/posts/new">New post</a><span class="greeting">{}</span><a class="button" href="{}">Logout</a>"#,
            text(given_name),
            attr(logout_url),
        ),
    };

    format!(r#"<header><a class="brand" href="/">Quill</a><nav>{nav}</nav></header>"#)
}

/// Wrap `body` in the full document. `header` is omitted on error pages.
pub fn page(title: &str, header: Option<&SessionView>, body: &str) -> String {
    let header = header.map(self::header).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Quill</title>
<style>{STYLESHEET}</style>
</head>
<body>
{header}
<main>
{body}
</main>
</body>
</html>
"#,
        title = text(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::AuthLinks;

    #[test]
    fn test_signed_out_header() {
        let view = SessionView::select(None, &AuthLinks::default());
        let html = header(&view);

        assert!(html.contains(r#"href="/api/auth/login">Login</a>"#));
        assert!(html.contains(r#"href="/api/auth/register">Sign Up</a>"#));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn test_signed_in_header_escapes_name() {
        let view = SessionView::SignedIn {
            given_name: "<script>".to_string(),
            logout_url: "/api/auth/logout".to_string(),
        };
        let html = header(&view);

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Logout"));
        assert!(!html.contains("Login"));
    }
}
