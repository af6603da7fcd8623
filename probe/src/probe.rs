//! The six probe operations.
//!
//! Each operation sends one request through the transport, then writes either
//! a heading followed by the decoded body or a single fixed failure line. The
//! failure line never carries the status or error text; those are logged.

use std::io::{self, Write};

use blog_core::{ApiError, BlogClient, Comment, NewPost, Post};
use serde::Serialize;
use thiserror::Error;

use crate::transport::Transport;

/// Why a probe operation did not return a value.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The API call failed; the failure line has already been written.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Console output could not be written.
    #[error("writing probe output failed: {0}")]
    Output(#[from] io::Error),
}

/// Payload sent by [`Probe::post_post`].
pub fn create_payload() -> NewPost {
    NewPost {
        title: "foo".to_string(),
        body: "bar".to_string(),
        user_id: 1,
    }
}

/// Payload sent by [`Probe::put_post`].
pub fn update_payload() -> NewPost {
    NewPost {
        title: "foo".to_string(),
        body: "bar updated".to_string(),
        user_id: 1,
    }
}

/// Runs probe operations through `transport` and prints to `out`.
pub struct Probe<T, W> {
    client: BlogClient,
    transport: T,
    out: W,
}

impl<T: Transport, W: Write> Probe<T, W> {
    pub fn new(client: BlogClient, transport: T, out: W) -> Self {
        Self {
            client,
            transport,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn get_posts(&mut self) -> Result<Vec<Post>, ProbeError> {
        let result = self
            .transport
            .execute(self.client.build_list_posts())
            .and_then(|response| self.client.parse_list_posts(response));
        self.report(result, "GET /posts:", "Failed to retrieve posts")
    }

    pub fn get_post_by_id(&mut self, id: u64) -> Result<Post, ProbeError> {
        let result = self
            .transport
            .execute(self.client.build_get_post(id))
            .and_then(|response| self.client.parse_get_post(response));
        self.report(result, &format!("GET /posts/{id}:"), "Failed to retrieve post")
    }

    pub fn get_post_comments(&mut self, id: u64) -> Result<Vec<Comment>, ProbeError> {
        let result = self
            .transport
            .execute(self.client.build_list_comments(id))
            .and_then(|response| self.client.parse_list_comments(response));
        self.report(
            result,
            &format!("GET /posts/{id}/comments:"),
            "Failed to retrieve comments",
        )
    }

    /// Create a post from the fixed demonstration payload.
    pub fn post_post(&mut self) -> Result<Post, ProbeError> {
        self.create_post(&create_payload())
    }

    pub fn create_post(&mut self, input: &NewPost) -> Result<Post, ProbeError> {
        let result = self
            .client
            .build_create_post(input)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create_post(response));
        self.report(result, "POST /posts:", "Failed to create post")
    }

    /// Replace post `id` with the fixed demonstration payload.
    pub fn put_post(&mut self, id: u64) -> Result<Post, ProbeError> {
        self.update_post(id, &update_payload())
    }

    pub fn update_post(&mut self, id: u64, input: &NewPost) -> Result<Post, ProbeError> {
        let result = self
            .client
            .build_update_post(id, input)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update_post(response));
        self.report(result, &format!("PUT /posts/{id}:"), "Failed to update post")
    }

    pub fn delete_post(&mut self, id: u64) -> Result<(), ProbeError> {
        let result = self
            .transport
            .execute(self.client.build_delete_post(id))
            .and_then(|response| self.client.parse_delete_post(response));
        match result {
            Ok(()) => {
                writeln!(self.out, "DELETE /posts/{id}: Successfully deleted")?;
                Ok(())
            }
            Err(err) => self.fail(err, "Failed to delete post"),
        }
    }

    fn report<V: Serialize>(
        &mut self,
        result: Result<V, ApiError>,
        heading: &str,
        failure: &str,
    ) -> Result<V, ProbeError> {
        match result {
            Ok(value) => {
                let rendered = serde_json::to_string_pretty(&value)
                    .map_err(|e| ApiError::SerializationError(e.to_string()))?;
                writeln!(self.out, "{heading}")?;
                writeln!(self.out, "{rendered}")?;
                Ok(value)
            }
            Err(err) => self.fail(err, failure),
        }
    }

    fn fail<V>(&mut self, err: ApiError, failure: &str) -> Result<V, ProbeError> {
        tracing::warn!(error = %err, status = ?err.status(), "{failure}");
        writeln!(self.out, "{failure}")?;
        Err(ProbeError::Api(err))
    }
}
