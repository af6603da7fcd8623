use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Number of posts in the fixture.
pub const POST_COUNT: u64 = 100;
/// Comments attached to every post.
pub const COMMENTS_PER_POST: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Read-only dataset. Writes are simulated against it and never stored.
#[derive(Debug)]
pub struct Fixture {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Fixture {
    pub fn new() -> Self {
        let posts = (1..=POST_COUNT)
            .map(|id| Post {
                user_id: (id - 1) / 10 + 1,
                id,
                title: format!("post {id} title"),
                body: format!("post {id} body"),
            })
            .collect();
        let comments = (1..=POST_COUNT * COMMENTS_PER_POST)
            .map(|id| Comment {
                post_id: (id - 1) / COMMENTS_PER_POST + 1,
                id,
                name: format!("comment {id}"),
                email: format!("reader{id}@example.com"),
                body: format!("comment {id} body"),
            })
            .collect();
        Self { posts, comments }
    }

    pub fn post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn comments_for(&self, post_id: u64) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub type Db = Arc<Fixture>;

pub fn app() -> Router {
    let db: Db = Arc::new(Fixture::new());
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .route("/posts/{id}/comments", get(list_comments))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.posts.clone())
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    db.post(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_comments(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Comment>>, StatusCode> {
    db.post(id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(db.comments_for(id)))
}

// Creation always hands out the next id after the fixture and forgets the post.
async fn create_post(Json(input): Json<PostInput>) -> (StatusCode, Json<Post>) {
    let post = Post {
        user_id: input.user_id,
        id: POST_COUNT + 1,
        title: input.title,
        body: input.body,
    };
    tracing::debug!(id = post.id, "simulated create");
    (StatusCode::CREATED, Json(post))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, StatusCode> {
    db.post(id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(id, "simulated update");
    Ok(Json(Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    }))
}

async fn delete_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    db.post(id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(id, "simulated delete");
    Ok(Json(json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_reference_sizes() {
        let fixture = Fixture::new();
        assert_eq!(fixture.posts.len(), 100);
        assert_eq!(fixture.comments.len(), 500);
    }

    #[test]
    fn fixture_assigns_ten_posts_per_user() {
        let fixture = Fixture::new();
        assert_eq!(fixture.post(1).unwrap().user_id, 1);
        assert_eq!(fixture.post(10).unwrap().user_id, 1);
        assert_eq!(fixture.post(11).unwrap().user_id, 2);
        assert_eq!(fixture.post(100).unwrap().user_id, 10);
    }

    #[test]
    fn comments_are_grouped_by_post() {
        let fixture = Fixture::new();
        let comments = fixture.comments_for(2);
        assert_eq!(comments.len(), 5);
        assert!(comments.iter().all(|c| c.post_id == 2));
        assert_eq!(comments[0].id, 6);
    }

    #[test]
    fn unknown_post_is_absent() {
        let fixture = Fixture::new();
        assert!(fixture.post(0).is_none());
        assert!(fixture.post(101).is_none());
    }

    #[test]
    fn post_serializes_with_camel_case() {
        let json = serde_json::to_value(Fixture::new().post(1).unwrap()).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn post_input_rejects_missing_body() {
        let result: Result<PostInput, _> = serde_json::from_str(r#"{"title":"foo","userId":1}"#);
        assert!(result.is_err());
    }
}
