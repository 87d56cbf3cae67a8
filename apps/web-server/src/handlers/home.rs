//! Home page handler.

use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};

use quill_core::domain::SessionView;
use quill_core::ports::PostRepository;

use crate::middleware::error::PageResult;
use crate::middleware::session::resolve_session;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Session lookup and post listing run concurrently; the page is rendered
/// once both have finished. A failed listing is an error page, never an
/// empty list.
pub async fn index(req: HttpRequest, state: web::Data<AppState>) -> PageResult<HttpResponse> {
    let session = async { resolve_session(&req, state.tokens.as_ref()) };
    let (session, posts) = futures::join!(session, state.posts.list_summaries());

    let view = SessionView::select(session.as_ref(), &state.links);
    let posts = posts?;

    tracing::debug!(
        signed_in = view.is_signed_in(),
        posts = posts.len(),
        "Rendering home page"
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::home::render(&view, &posts)))
}
