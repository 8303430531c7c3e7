//! Blog post handlers.

use actix_web::{HttpResponse, web};

use masterblog_core::DomainError;
use masterblog_core::domain::{ListOptions, NewPost, PostPatch, SearchCriteria};
use masterblog_shared::MessageResponse;
use masterblog_shared::dto::{
    CreatePostRequest, ListPostsQuery, SearchPostsQuery, UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts?sort=<field>&direction=<asc|desc>
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let query = ListPostsQuery::from_pairs(query.into_inner());
    let options = ListOptions::parse(query.sort.as_deref(), query.direction.as_deref())?;

    let posts = state.posts.list(options).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewPost::try_new(req.title, req.content, req.author)?;

    let post = state.posts.create(input).await?;

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
///
/// Responds with a status message only, not the updated post.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if !req.has_all_keys() {
        return Err(DomainError::invalid_input().into());
    }

    let patch = PostPatch {
        title: req.title.flatten(),
        content: req.content.flatten(),
        author: req.author.flatten(),
    };
    state.posts.update(id, patch).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::post_updated(id)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::post_deleted(id)))
}

/// GET /api/posts/search?title=&content=&author=&date=
///
/// Never rejects a query string: unknown keys are ignored and a repeated key
/// uses its first value.
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let query = SearchPostsQuery::from_pairs(query.into_inner());
    let criteria =
        SearchCriteria::new(&query.title, &query.content, &query.author, &query.date);

    let posts = state.posts.search(criteria).await?;

    Ok(HttpResponse::Ok().json(posts))
}
