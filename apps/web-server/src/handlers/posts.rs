//! Post pages: detail, creation and deletion.

use actix_web::{HttpResponse, http::StatusCode, http::header, http::header::ContentType, web};
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::{BlogPost, NewBlogPost, SessionView};
use quill_shared::dto::CreatePostForm;

use crate::middleware::error::PageResult;
use crate::middleware::session::MaybeUser;
use crate::state::AppState;
use crate::views;

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn post_not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "post",
        id,
    }
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// GET /posts/new
pub async fn new_form(state: web::Data<AppState>, user: MaybeUser) -> HttpResponse {
    let Some(user) = user.0 else {
        return see_other(&state.links.login);
    };

    let view = SessionView::select(Some(&user), &state.links);
    html(StatusCode::OK, views::post::render_form(&view, None, None))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    user: MaybeUser,
    form: web::Form<CreatePostForm>,
) -> PageResult<HttpResponse> {
    let Some(user) = user.0 else {
        return Ok(see_other(&state.links.login));
    };
    let form = form.into_inner();

    let draft = match NewBlogPost::from(form.clone()).validate() {
        Ok(draft) => draft,
        Err(DomainError::Validation(msg)) => {
            let view = SessionView::select(Some(&user), &state.links);
            return Ok(html(
                StatusCode::UNPROCESSABLE_ENTITY,
                views::post::render_form(&view, Some(&form), Some(&msg)),
            ));
        }
        Err(other) => return Err(other.into()),
    };

    let post = state.posts.insert(BlogPost::new(draft, &user)).await?;
    tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");

    Ok(see_other("/"))
}

/// GET /posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<Uuid>,
) -> PageResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    let can_delete = user.0.as_ref().is_some_and(|u| post.is_authored_by(u));
    let view = SessionView::select(user.0.as_ref(), &state.links);

    Ok(html(
        StatusCode::OK,
        views::post::render(&view, &post, can_delete),
    ))
}

/// POST /posts/{id}/delete - author only.
pub async fn delete(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<Uuid>,
) -> PageResult<HttpResponse> {
    let Some(user) = user.0 else {
        return Ok(see_other(&state.links.login));
    };
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    if !post.is_authored_by(&user) {
        return Err(
            DomainError::Forbidden("Only the author can delete this post".to_string()).into(),
        );
    }

    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "Post deleted");

    Ok(see_other("/"))
}
