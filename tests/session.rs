use redkit::{
    Credentials, Edited, Endpoints, ListingOptions, RedditError, Session, VoteDirection,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_string, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str = "redkit-tests/0.1";

fn credentials() -> Credentials {
    Credentials::new("alice", "hunter2", "app", "secret")
}

fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints {
        auth_url: server.uri(),
        api_url: server.uri(),
    }
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "bearer",
            "expires_in": 86400,
            "scope": "*"
        })))
        .mount(server)
        .await;
}

async fn logged_in(server: &MockServer) -> Session {
    mount_token(server, "tok").await;
    match Session::connect(credentials(), USER_AGENT, endpoints(server)).await {
        Ok(session) => session,
        Err(e) => panic!("login failed: {e}"),
    }
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({}))
}

#[tokio::test]
async fn login_uses_password_grant_with_basic_auth() {
    let server = MockServer::start().await;
    let basic = format!("Basic {}", base64::encode("app:secret"));

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .and(header("authorization", basic.as_str()))
        .and(header("user-agent", USER_AGENT))
        .and(body_string("grant_type=password&username=alice&password=hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::connect(credentials(), USER_AGENT, endpoints(&server))
        .await
        .unwrap();
    assert_eq!(session.access_token(), Some("tok"));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn login_without_access_token_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "bearer"})))
        .mount(&server)
        .await;

    let mut session = Session::unauthenticated(credentials(), USER_AGENT, endpoints(&server)).unwrap();
    let err = session.login().await.unwrap_err();

    assert!(matches!(err, RedditError::Authentication(_)));
    assert_eq!(session.access_token(), None);
}

#[tokio::test]
async fn login_with_non_string_token_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": 12})))
        .mount(&server)
        .await;

    let result = Session::connect(credentials(), USER_AGENT, endpoints(&server)).await;
    assert!(matches!(result, Err(RedditError::Authentication(_))));
}

#[tokio::test]
async fn login_with_bad_password_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;

    let result = Session::connect(credentials(), USER_AGENT, endpoints(&server)).await;
    match result {
        Err(RedditError::Authentication(reason)) => assert!(reason.contains("invalid_grant")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn login_with_bad_app_credentials_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "Unauthorized", "error": 401})),
        )
        .mount(&server)
        .await;

    let mut session =
        Session::unauthenticated(credentials(), USER_AGENT, endpoints(&server)).unwrap();
    match session.login().await {
        Err(RedditError::Authentication(reason)) => {
            assert!(reason.contains("401"));
            assert!(reason.contains("Unauthorized"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(session.access_token(), None);
}

#[tokio::test]
async fn login_with_unreadable_reply_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = Session::connect(credentials(), USER_AGENT, endpoints(&server)).await;
    assert!(matches!(result, Err(RedditError::Authentication(_))));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let endpoints = Endpoints {
        auth_url: "http://127.0.0.1:1".to_string(),
        api_url: "http://127.0.0.1:1".to_string(),
    };
    let result = Session::connect(credentials(), USER_AGENT, endpoints).await;
    assert!(matches!(result, Err(RedditError::Network(_))));
}

#[tokio::test]
async fn vote_sends_fullname_and_direction() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/vote"))
        .and(header("authorization", "bearer tok"))
        .and(header("user-agent", USER_AGENT))
        .and(body_string("id=t3_abc&dir=1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/vote"))
        .and(body_string("id=t3_abc&dir=-1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/vote"))
        .and(body_string("id=t3_abc&dir=0"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    session.vote("t3_abc", VoteDirection::Up).await.unwrap();
    session.vote("t3_abc", VoteDirection::Down).await.unwrap();
    session.vote("t3_abc", VoteDirection::Clear).await.unwrap();
}

#[tokio::test]
async fn vote_on_missing_thing_is_a_validation_error() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/vote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "json": {"errors": [["INVALID_ID", "that thing doesn't exist", "id"]]}
        })))
        .mount(&server)
        .await;

    match session.vote("t3_gone", VoteDirection::Up).await {
        Err(RedditError::ApiValidation { code, description }) => {
            assert_eq!(code, "INVALID_ID");
            assert_eq!(description, "that thing doesn't exist");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn submit_text_posts_self_kind() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/submit"))
        .and(body_string_contains("api_type=json"))
        .and(body_string_contains("sr=rust"))
        .and(body_string_contains("kind=self"))
        .and(body_string_contains("title=Hello+world"))
        .and(body_string_contains("resubmit=true"))
        .and(body_string_contains("text=First+post"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "json": {"errors": [], "data": {"url": "https://www.reddit.com/r/rust/comments/x/hello_world/"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    session
        .submit_text("rust", "Hello world", "First post")
        .await
        .unwrap();
}

#[tokio::test]
async fn submit_link_posts_url() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/submit"))
        .and(body_string_contains("kind=link"))
        .and(body_string_contains("url=https%3A%2F%2Fblog.rust-lang.org%2F"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    session
        .submit_link("rust", "Blog", "https://blog.rust-lang.org/")
        .await
        .unwrap();
}

#[tokio::test]
async fn submit_rate_limited() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "json": {"errors": [["RATELIMIT", "you are doing that too much", "ratelimit"]]}
        })))
        .mount(&server)
        .await;

    let err = session.submit_text("rust", "t", "x").await.unwrap_err();
    assert!(matches!(err, RedditError::ApiValidation { ref code, .. } if code == "RATELIMIT"));
}

#[tokio::test]
async fn list_links_passes_options_and_cursors() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/rust/new"))
        .and(query_param("limit", "25"))
        .and(query_param("after", "t3_prev"))
        .and(header("authorization", "bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": {
                "after": "t3_two",
                "before": null,
                "children": [
                    {"kind": "t3", "data": {"name": "t3_one", "id": "one", "title": "One", "score": 5, "is_self": true}},
                    {"kind": "t3", "data": {"name": "t3_two", "id": "two", "title": "Two", "score": 7, "url": "https://example.com"}}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListingOptions::default().with_limit(25).with_after("t3_prev");
    let list = session.list_links("rust", "new", &options).await.unwrap();

    assert_eq!(list.links.len(), 2);
    assert_eq!(list.links[0].fullname, "t3_one");
    assert!(list.links[0].is_self);
    assert_eq!(list.links[1].url, "https://example.com");
    assert_eq!(list.after.as_deref(), Some("t3_two"));
    assert_eq!(list.before, None);
}

#[tokio::test]
async fn list_links_of_missing_subreddit() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/nope/hot"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found", "error": 404})),
        )
        .mount(&server)
        .await;

    match session.list_links("nope", "hot", &ListingOptions::default()).await {
        Err(RedditError::ApiHttp { code, message }) => {
            assert_eq!(code, "404");
            assert_eq!(message.as_deref(), Some("Not Found"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn list_comments_reads_second_element_of_array() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/rust/comments/abc"))
        .and(query_param("depth", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"kind": "Listing", "data": {"children": [
                {"kind": "t3", "data": {"name": "t3_abc", "title": "The link"}}
            ]}},
            {"kind": "Listing", "data": {"after": null, "before": null, "children": [
                {"kind": "t1", "data": {
                    "name": "t1_a", "parent_id": "t3_abc", "author": "ferris",
                    "body": "first", "edited": false, "score": 3, "replies": {
                        "kind": "Listing", "data": {"children": [
                            {"kind": "t1", "data": {
                                "name": "t1_b", "parent_id": "t1_a", "author": "crab",
                                "body": "child", "edited": 1498867200.0, "replies": ""
                            }}
                        ]}
                    }
                }},
                {"kind": "t1", "data": {
                    "name": "t1_c", "parent_id": "t3_abc", "author": "corro",
                    "body": "second", "edited": 1498867200.0, "gilded": 2, "replies": ""
                }}
            ]}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListingOptions {
        depth: 2,
        ..Default::default()
    };
    let reply = session
        .list_comments("rust", Some("abc"), &options)
        .await
        .unwrap();

    assert_eq!(reply.len(), 2);
    let first = &reply.comments[0];
    assert_eq!(first.fullname, "t1_a");
    assert_eq!(first.edited, Edited::NotEdited);
    assert_eq!(first.replies.comments[0].body, "child");
    assert_eq!(first.replies.comments[0].edited, Edited::At(1498867200.0));

    let second = &reply.comments[1];
    assert_eq!(second.author, "corro");
    assert_eq!(second.gilded, 2);
    assert!(second.edited.is_edited());

    assert_eq!(reply.flatten().len(), 3);
}

#[tokio::test]
async fn list_subreddit_comments_uses_bare_listing() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/rust/comments"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": {"after": "t1_z", "children": [
                {"kind": "t1", "data": {"name": "t1_z", "body": "latest", "edited": false}}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = session
        .list_subreddit_comments("rust", &ListingOptions::default().with_limit(1))
        .await
        .unwrap();
    assert_eq!(reply.comments[0].body, "latest");
    assert_eq!(reply.after.as_deref(), Some("t1_z"));
}

#[tokio::test]
async fn comment_posts_reply_to_parent() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/comment"))
        .and(body_string("api_type=json&text=Nice+post%21&thing_id=t3_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "json": {"errors": [], "data": {"things": [{"kind": "t1", "data": {"name": "t1_new"}}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    session.comment("t3_abc", "Nice post!").await.unwrap();
}

#[tokio::test]
async fn hide_and_unhide_post_the_fullname() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/hide"))
        .and(body_string("id=t3_abc"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/unhide"))
        .and(body_string("id=t3_abc"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    session.hide("t3_abc").await.unwrap();
    session.unhide("t3_abc").await.unwrap();
}

#[tokio::test]
async fn user_unwraps_about_envelope() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/user/spez/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "t2",
            "data": {"name": "spez", "id": "1w72", "link_karma": 10, "comment_karma": 20, "is_mod": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = session.user("spez").await.unwrap();
    assert_eq!(user.name, "spez");
    assert_eq!(user.total_karma(), 30);
    assert!(user.is_mod);
}

#[tokio::test]
async fn me_reads_bare_object() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .and(header("authorization", "bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "alice", "id": "a1", "link_karma": 1, "comment_karma": 2,
            "over_18": true, "is_suspended": false, "is_employee": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let me = session.me().await.unwrap();
    assert_eq!(me.name, "alice");
    assert!(me.over_18);
    assert!(me.is_employee);
    assert!(!me.is_suspended);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    let session = logged_in(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    assert!(matches!(session.me().await, Err(RedditError::Decode(_))));
}

#[tokio::test]
async fn truncated_body_is_an_io_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"a\"")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let endpoints = Endpoints {
        auth_url: format!("http://{addr}"),
        api_url: format!("http://{addr}"),
    };
    let mut session = Session::unauthenticated(credentials(), USER_AGENT, endpoints).unwrap();
    session.set_access_token("tok");

    let result = session.me().await;
    assert!(matches!(result, Err(RedditError::Io(_))), "got {result:?}");

    server.await.unwrap();
}

#[tokio::test]
async fn relogin_replaces_token() {
    let server = MockServer::start().await;
    let mut session = logged_in(&server).await;
    assert_eq!(session.access_token(), Some("tok"));

    server.reset().await;
    mount_token(&server, "fresh").await;

    session.login().await.unwrap();
    assert_eq!(session.access_token(), Some("fresh"));
}
