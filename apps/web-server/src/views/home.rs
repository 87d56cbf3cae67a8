//! Home page: header plus the post listing.

use quill_core::domain::{PostSummary, SessionView};

use super::{attr, date, layout, text};

const EXCERPT_CHARS: usize = 280;

fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

pub(crate) fn byline(author_name: &str, author_image: Option<&str>, created: &str) -> String {
    let avatar = author_image
        .map(|src| format!(r#"<img src="{}" alt="">"#, attr(src)))
        .unwrap_or_default();
    format!(
        r#"<p class="byline">{avatar}<span class="author">{}</span><time>{}</time></p>"#,
        text(author_name),
        text(created),
    )
}

fn card(post: &PostSummary) -> String {
    let cover = post
        .image_url
        .as_deref()
        .map(|src| format!(r#"<img class="cover" src="{}" alt="">"#, attr(src)))
        .unwrap_or_default();

    format!(
        r#"<article class="post-card">{cover}<h2><a href="/posts/{id}">{title}</a></h2>{byline}<p>{excerpt}</p></article>"#,
        id = post.id,
        title = text(&post.title),
        byline = byline(
            &post.author_name,
            post.author_image.as_deref(),
            &date(&post.created_at)
        ),
        excerpt = text(&excerpt(&post.content)),
    )
}

/// Render the home page. `posts` is shown in the order given.
pub fn render(view: &SessionView, posts: &[PostSummary]) -> String {
    let body = if posts.is_empty() {
        r#"<p class="empty">No posts yet.</p>"#.to_string()
    } else {
        let cards: String = posts.iter().map(card).collect();
        format!(r#"<section class="posts">{cards}</section>"#)
    };

    layout::page("Home", Some(view), &body)
}
