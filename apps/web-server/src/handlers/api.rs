//! JSON listing for browser clients.

use actix_web::web;

use quill_core::ports::PostRepository;
use quill_shared::ApiResponse;
use quill_shared::dto::PostSummaryResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
) -> AppResult<web::Json<ApiResponse<Vec<PostSummaryResponse>>>> {
    let posts = state.posts.list_summaries().await?;

    Ok(web::Json(ApiResponse::ok(
        posts.into_iter().map(PostSummaryResponse::from).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use crate::handlers::configure_routes;
    use crate::state::test_support::{
        UnreachablePostRepository, ayoub, post_by, state_with, state_with_posts,
    };

    use super::*;

    #[actix_web::test]
    async fn test_list_posts_json() {
        let author = ayoub();
        let state = state_with_posts(vec![
            post_by(&author, "xfb", "dfb"),
            post_by(&author, "dvf", "fnfg"),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        let posts = body["data"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["title"], "xfb");
        assert_eq!(posts[0]["authorName"], "Ayoub");
        assert!(posts[0].get("imageURL").is_some());
        assert!(posts[0].get("createAt").is_some());
        assert!(posts[0].get("authorId").is_none());
    }

    #[actix_web::test]
    async fn test_list_posts_store_failure_is_problem_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(Arc::new(UnreachablePostRepository))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 500);
    }
}
