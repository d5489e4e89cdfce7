use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fbpage_core::graph::{GraphBody, GraphMethod, GraphRequest, GraphTransport};
use fbpage_core::{GraphConfig, GraphError, PageControlPlane};
use fbpage_types::models::{Comment, Listing, ReactionBreakdown};
use serde_json::{Value, json};

const BASE: &str = "https://graph.facebook.com/v22.0";

/// Records every request and answers from a scripted queue (`{}` once exhausted).
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<GraphRequest>>,
    replies: Mutex<VecDeque<Result<Value, GraphError>>>,
}

impl RecordingTransport {
    fn replying(replies: Vec<Result<Value, GraphError>>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into()),
        })
    }

    fn requests(&self) -> Vec<GraphRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl GraphTransport for RecordingTransport {
    async fn execute(&self, request: GraphRequest) -> Result<Value, GraphError> {
        self.requests.lock().expect("requests lock").push(request);
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

fn config() -> GraphConfig {
    GraphConfig::default()
        .with_access_token(Some("token-123".to_string()))
        .with_page_id(Some("page-1".to_string()))
}

fn control(transport: &Arc<RecordingTransport>) -> PageControlPlane {
    PageControlPlane::new(config(), transport.clone())
}

fn single(transport: &RecordingTransport) -> GraphRequest {
    let mut requests = transport.requests();
    assert_eq!(requests.len(), 1, "expected exactly one outbound call");
    requests.remove(0)
}

fn assert_call(request: &GraphRequest, method: GraphMethod, path: &str) {
    assert_eq!(request.method, method);
    assert_eq!(request.url, format!("{BASE}/{path}"));
    assert_eq!(request.query_value("access_token"), Some("token-123"));
}

fn remote_error(message: &str) -> GraphError {
    GraphError::Api {
        status: 400,
        code: Some(100),
        message: message.to_string(),
    }
}

#[tokio::test]
async fn post_to_facebook_posts_message_to_page_feed() {
    let transport = RecordingTransport::replying(vec![Ok(json!({"id": "page-1_42"}))]);
    let created = control(&transport)
        .post_to_facebook("hello world")
        .await
        .expect("post should succeed");

    assert_eq!(created.id, "page-1_42");
    let request = single(&transport);
    assert_call(&request, GraphMethod::Post, "page-1/feed");
    assert_eq!(request.form_value("message"), Some("hello world"));
}

#[tokio::test]
async fn post_image_sends_url_and_caption_to_photos() {
    let transport =
        RecordingTransport::replying(vec![Ok(json!({"id": "photo-1", "post_id": "page-1_7"}))]);
    let created = control(&transport)
        .post_image_to_facebook("https://cdn.example/cat.png", "a cat")
        .await
        .expect("photo post should succeed");

    assert_eq!(created.post_id.as_deref(), Some("page-1_7"));
    let request = single(&transport);
    assert_call(&request, GraphMethod::Post, "page-1/photos");
    assert_eq!(request.form_value("url"), Some("https://cdn.example/cat.png"));
    assert_eq!(request.form_value("caption"), Some("a cat"));
}

#[tokio::test]
async fn schedule_post_forwards_past_timestamp_and_surfaces_remote_rejection() {
    let transport = RecordingTransport::replying(vec![Err(remote_error(
        "The specified scheduled publish time is invalid.",
    ))]);
    let err = control(&transport)
        .schedule_post("later", 1)
        .await
        .expect_err("remote rejection should surface");

    assert!(matches!(err, GraphError::Api { status: 400, .. }));
    let request = single(&transport);
    assert_call(&request, GraphMethod::Post, "page-1/feed");
    assert_eq!(request.form_value("published"), Some("false"));
    assert_eq!(request.form_value("scheduled_publish_time"), Some("1"));
}

#[tokio::test]
async fn update_and_delete_post_target_the_post_node() {
    let transport = RecordingTransport::replying(vec![
        Ok(json!({"success": true})),
        Ok(json!({"success": true})),
    ]);
    let control = control(&transport);

    let updated = control.update_post("p1", "edited").await.expect("update");
    let deleted = control.delete_post("p1").await.expect("delete");
    assert!(updated.success && deleted.success);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_call(&requests[0], GraphMethod::Post, "p1");
    assert_eq!(requests[0].form_value("message"), Some("edited"));
    assert_call(&requests[1], GraphMethod::Delete, "p1");
    assert_eq!(requests[1].body, GraphBody::Empty);
}

#[tokio::test]
async fn reads_request_expected_fields() {
    let transport = RecordingTransport::replying(vec![
        Ok(json!({"data": [{"id": "p1", "message": "hi"}]})),
        Ok(json!({"data": [{"id": "c1"}, {"id": "c2"}]})),
    ]);
    let control = control(&transport);

    let posts = control.get_page_posts().await.expect("posts");
    let count = control.get_number_of_comments("p1").await.expect("count");
    assert_eq!(posts.data.len(), 1);
    assert_eq!(count, 2);

    let requests = transport.requests();
    assert_call(&requests[0], GraphMethod::Get, "page-1/posts");
    assert_eq!(requests[0].query_value("fields"), Some("id,message,created_time"));
    assert_call(&requests[1], GraphMethod::Get, "p1/comments");
    assert_eq!(
        requests[1].query_value("fields"),
        Some("id,message,from,created_time")
    );
}

#[tokio::test]
async fn counters_read_nested_fields_with_zero_defaults() {
    let transport = RecordingTransport::replying(vec![
        Ok(json!({"id": "p1", "likes": {"data": [], "summary": {"total_count": 12}}})),
        Ok(json!({"id": "p1"})),
        Ok(json!({"id": "page-1", "fan_count": 3400})),
    ]);
    let control = control(&transport);

    assert_eq!(control.get_number_of_likes("p1").await.expect("likes"), 12);
    assert_eq!(control.get_post_share_count("p1").await.expect("shares"), 0);
    assert_eq!(control.get_page_fan_count().await.expect("fans"), 3400);

    let requests = transport.requests();
    assert_eq!(requests[0].query_value("fields"), Some("likes.summary(true)"));
    assert_eq!(requests[1].query_value("fields"), Some("shares"));
    assert_call(&requests[2], GraphMethod::Get, "page-1");
    assert_eq!(requests[2].query_value("fields"), Some("fan_count"));
}

#[tokio::test]
async fn reply_and_moderation_calls_target_the_comment() {
    let transport = RecordingTransport::replying(vec![
        Ok(json!({"id": "c1_reply"})),
        Ok(json!({"success": true})),
        Ok(json!({"success": true})),
        Ok(json!({"success": true})),
    ]);
    let control = control(&transport);

    control
        .reply_to_comment("p1", "c1", "thanks!")
        .await
        .expect("reply");
    control.hide_comment("c1").await.expect("hide");
    control.unhide_comment("c1").await.expect("unhide");
    control
        .delete_comment_from_post("p1", "c1")
        .await
        .expect("delete");

    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    assert_call(&requests[0], GraphMethod::Post, "c1/comments");
    assert_eq!(requests[0].form_value("message"), Some("thanks!"));
    assert_call(&requests[1], GraphMethod::Post, "c1");
    assert_eq!(requests[1].form_value("is_hidden"), Some("true"));
    assert_eq!(requests[2].form_value("is_hidden"), Some("false"));
    assert_call(&requests[3], GraphMethod::Delete, "c1");
}

#[tokio::test]
async fn bulk_delete_reports_each_identifier_independently() {
    let transport = RecordingTransport::replying(vec![
        Ok(json!({"success": true})),
        Err(GraphError::Transport("connection reset".to_string())),
        Ok(json!({"success": true})),
    ]);
    let ids = vec!["c1".to_string(), "c2".to_string(), "c3".to_string()];

    let results = control(&transport).bulk_delete_comments(&ids).await;

    assert_eq!(results.len(), ids.len());
    let flags: Vec<(&str, bool)> = results
        .iter()
        .map(|item| (item.comment_id.as_str(), item.is_success()))
        .collect();
    assert_eq!(flags, vec![("c1", true), ("c2", false), ("c3", true)]);
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn bulk_hide_survives_every_call_failing() {
    let transport = RecordingTransport::replying(vec![
        Err(remote_error("unsupported")),
        Err(remote_error("unsupported")),
    ]);
    let ids = vec!["c1".to_string(), "c2".to_string()];

    let results = control(&transport).bulk_hide_comments(&ids).await;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|item| !item.is_success()));
    assert!(
        transport
            .requests()
            .iter()
            .all(|request| request.form_value("is_hidden") == Some("true"))
    );
}

#[tokio::test]
async fn filter_negative_comments_makes_no_remote_call() {
    let transport = RecordingTransport::replying(Vec::new());
    let comments: Listing<Comment> = serde_json::from_value(json!({
        "data": [
            {"id": "1", "message": "Great post"},
            {"id": "2", "message": "Terrible experience"},
            {"id": "3", "message": "Thanks"}
        ]
    }))
    .expect("comments decode");

    let flagged = control(&transport).filter_negative_comments(&comments);

    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].id, "2");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn top_commenters_rank_comment_authors() {
    let transport = RecordingTransport::replying(vec![Ok(json!({
        "data": [
            {"id": "1", "from": {"id": "u1"}},
            {"id": "2", "from": {"id": "u2"}},
            {"id": "3", "from": {"id": "u2"}}
        ]
    }))]);

    let ranked = control(&transport)
        .get_post_top_commenters("p1")
        .await
        .expect("top commenters");

    assert_eq!(ranked[0].user_id, "u2");
    assert_eq!(ranked[0].count, 2);
    assert_eq!(ranked[1].user_id, "u1");
}

fn reaction_reply(metric: &str, value: i64) -> Result<Value, GraphError> {
    Ok(json!({
        "data": [{"name": metric, "period": "lifetime", "values": [{"value": value}]}]
    }))
}

#[tokio::test]
async fn reaction_breakdown_merges_six_independent_reads() {
    let transport = RecordingTransport::replying(vec![
        reaction_reply("post_reactions_like_total", 10),
        reaction_reply("post_reactions_love_total", 2),
        reaction_reply("post_reactions_wow_total", 0),
        reaction_reply("post_reactions_haha_total", 1),
        reaction_reply("post_reactions_sorry_total", 0),
        reaction_reply("post_reactions_anger_total", 0),
    ]);

    let breakdown = control(&transport)
        .get_post_reactions_breakdown("p1")
        .await
        .expect("breakdown");

    assert_eq!(
        breakdown,
        ReactionBreakdown {
            like: 10,
            love: 2,
            wow: 0,
            haha: 1,
            sorry: 0,
            anger: 0,
        }
    );
    assert_eq!(
        serde_json::to_value(breakdown).expect("breakdown encodes"),
        json!({"like": 10, "love": 2, "wow": 0, "haha": 1, "sorry": 0, "anger": 0})
    );

    let requests = transport.requests();
    assert_eq!(requests.len(), 6);
    for request in &requests {
        assert_call(request, GraphMethod::Get, "p1/insights");
        assert_eq!(request.query_value("period"), Some("lifetime"));
    }
    assert_eq!(
        requests[5].query_value("metric"),
        Some("post_reactions_anger_total")
    );
}

#[tokio::test]
async fn post_insights_requests_all_metrics_at_once() {
    let transport = RecordingTransport::replying(vec![Ok(json!({"data": []}))]);
    control(&transport)
        .get_post_insights("p1")
        .await
        .expect("insights");

    let request = single(&transport);
    assert_call(&request, GraphMethod::Get, "p1/insights");
    let metrics = request.query_value("metric").expect("metric param");
    assert_eq!(metrics.split(',').count(), 12);
    assert!(metrics.starts_with("post_impressions,post_impressions_unique"));
}

#[tokio::test]
async fn every_single_metric_read_targets_post_insights_with_its_metric() {
    let transport = RecordingTransport::replying(Vec::new());
    let control = control(&transport);

    control.get_post_impressions("p1").await.expect("impressions");
    control.get_post_impressions_unique("p1").await.expect("unique");
    control.get_post_impressions_paid("p1").await.expect("paid");
    control.get_post_impressions_organic("p1").await.expect("organic");
    control.get_post_engaged_users("p1").await.expect("engaged");
    control.get_post_clicks("p1").await.expect("clicks");
    control.get_post_reactions_like_total("p1").await.expect("like");
    control.get_post_reactions_love_total("p1").await.expect("love");
    control.get_post_reactions_wow_total("p1").await.expect("wow");
    control.get_post_reactions_haha_total("p1").await.expect("haha");
    control.get_post_reactions_sorry_total("p1").await.expect("sorry");
    control.get_post_reactions_anger_total("p1").await.expect("anger");

    let expected = [
        "post_impressions",
        "post_impressions_unique",
        "post_impressions_paid",
        "post_impressions_organic",
        "post_engaged_users",
        "post_clicks",
        "post_reactions_like_total",
        "post_reactions_love_total",
        "post_reactions_wow_total",
        "post_reactions_haha_total",
        "post_reactions_sorry_total",
        "post_reactions_anger_total",
    ];
    let requests = transport.requests();
    assert_eq!(requests.len(), expected.len());
    for (request, metric) in requests.iter().zip(expected) {
        assert_call(request, GraphMethod::Get, "p1/insights");
        assert_eq!(request.query_value("metric"), Some(metric));
        assert_eq!(request.query_value("period"), Some("lifetime"));
    }
}

#[tokio::test]
async fn direct_message_uses_messenger_json_body() {
    let transport = RecordingTransport::replying(vec![Ok(
        json!({"recipient_id": "u1", "message_id": "m.1"}),
    )]);

    let receipt = control(&transport)
        .send_dm_to_user("u1", "hi there")
        .await
        .expect("dm");

    assert_eq!(receipt.message_id.as_deref(), Some("m.1"));
    let request = single(&transport);
    assert_call(&request, GraphMethod::Post, "me/messages");
    assert_eq!(
        request.body,
        GraphBody::Json(json!({
            "recipient": {"id": "u1"},
            "message": {"text": "hi there"},
            "messaging_type": "RESPONSE"
        }))
    );
}

#[tokio::test]
async fn missing_token_fails_at_call_time_without_remote_call() {
    let transport = RecordingTransport::replying(Vec::new());
    let control = PageControlPlane::new(
        GraphConfig::default().with_page_id(Some("page-1".to_string())),
        transport.clone(),
    );

    let err = control
        .delete_post("p1")
        .await
        .expect_err("missing token should fail");

    assert_eq!(
        err,
        GraphError::MissingSetting("FACEBOOK_PAGE_ACCESS_TOKEN")
    );
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn failure_on_one_call_does_not_affect_the_next() {
    let transport = RecordingTransport::replying(vec![
        Err(GraphError::Transport("timed out".to_string())),
        Ok(json!({"success": true})),
    ]);
    let control = control(&transport);

    assert!(control.delete_comment("c1").await.is_err());
    assert!(control.delete_comment("c2").await.expect("second call").success);
}
