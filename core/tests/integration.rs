//! Exercise every client endpoint against the live mock server.
//!
//! Starts the mock server on a random port, then drives each build/parse pair
//! over real HTTP using ureq.

use blog_core::{ApiError, BlogClient, HttpMethod, HttpRequest, HttpResponse, NewPost};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> BlogClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    BlogClient::new(&format!("http://{addr}"))
}

#[test]
fn endpoint_walkthrough() {
    let client = start_server();

    // Step 1: list — the full fixture.
    let posts = client.parse_list_posts(execute(client.build_list_posts())).unwrap();
    assert_eq!(posts.len(), 100);

    // Step 2: get by id — id echoes the request.
    for id in [1, 50, 100] {
        let post = client.parse_get_post(execute(client.build_get_post(id))).unwrap();
        assert_eq!(post.id, id);
    }

    // Step 3: comments — all belong to post 1.
    let comments = client
        .parse_list_comments(execute(client.build_list_comments(1)))
        .unwrap();
    assert!(!comments.is_empty());
    assert!(comments.iter().all(|c| c.post_id == 1));

    // Step 4: create — payload echoed with a server id.
    let input = NewPost {
        title: "foo".to_string(),
        body: "bar".to_string(),
        user_id: 1,
    };
    let req = client.build_create_post(&input).unwrap();
    let created = client.parse_create_post(execute(req)).unwrap();
    assert_eq!(created.title, "foo");
    assert_eq!(created.body, "bar");
    assert_eq!(created.user_id, 1);
    assert_eq!(created.id, 101);

    // Step 5: update post 1.
    let input = NewPost {
        title: "foo".to_string(),
        body: "bar updated".to_string(),
        user_id: 1,
    };
    let req = client.build_update_post(1, &input).unwrap();
    let updated = client.parse_update_post(execute(req)).unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.body, "bar updated");

    // Step 6: delete post 1.
    client.parse_delete_post(execute(client.build_delete_post(1))).unwrap();

    // Step 7: missing post — NotFound.
    let err = client.parse_get_post(execute(client.build_get_post(9999))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
