//! Post detail and new-post form.

use quill_core::domain::{BlogPost, SessionView};
use quill_shared::dto::CreatePostForm;

use super::home::byline;
use super::{attr, date, layout, text};

/// Blank lines split paragraphs.
fn paragraphs(content: &str) -> String {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", text(p).replace('\n', "<br>")))
        .collect()
}

/// Full post. `can_delete` adds the author's delete button.
pub fn render(view: &SessionView, post: &BlogPost, can_delete: bool) -> String {
    let cover = post
        .image_url
        .as_deref()
        .map(|src| format!(r#"<img class="cover" src="{}" alt="">"#, attr(src)))
        .unwrap_or_default();
    let delete = if can_delete {
        format!(
            r#"<form method="post" action="/posts/{}/delete"><button class="button" type="submit">Delete post</button></form>"#,
            post.id
        )
    } else {
        String::new()
    };

    let body = format!(
        r#"<article>{cover}<h1>{title}</h1>{byline}{content}</article>{delete}"#,
        title = text(&post.title),
        byline = byline(
            &post.author_name,
            post.author_image.as_deref(),
            &date(&post.created_at)
        ),
        content = paragraphs(&post.content),
    );

    layout::page(&post.title, Some(view), &body)
}

/// New-post form, optionally refilled after a validation error.
pub fn render_form(view: &SessionView, draft: Option<&CreatePostForm>, error: Option<&str>) -> String {
    let (title, content, image_url) = draft
        .map(|d| (d.title.as_str(), d.content.as_str(), d.image_url.as_str()))
        .unwrap_or_default();
    let error = error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, text(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>New post</h1>{error}
<form method="post" action="/posts">
<label for="title">Title</label>
<input type="text" id="title" name="title" maxlength="200" required value="{title}">
<label for="image_url">Image URL</label>
<input type="url" id="image_url" name="image_url" value="{image_url}">
<label for="content">Content</label>
<textarea id="content" name="content" rows="12" required>{content}</textarea>
<p><button class="button primary" type="submit">Publish</button></p>
</form>"#,
        title = attr(title),
        image_url = attr(image_url),
        content = text(content),
    );

    layout::page("New post", Some(view), &body)
}
