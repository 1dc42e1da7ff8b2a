use vlrent::assistant::{
    ChatClient, ChatError, ChatMessage, HttpChatClient, OfflineClient, OFFLINE_SENTINEL,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpChatClient {
    HttpChatClient::new(
        "test-key".to_string(),
        server.uri(),
        "test-model".to_string(),
    )
}

#[tokio::test]
async fn test_reply_returns_message_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "The Wagon R is LKR 4,500 per day."}}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client
        .reply("How much per day?", &[], "You are VL Bot.")
        .await
        .unwrap();
    assert_eq!(reply, "The Wagon R is LKR 4,500 per day.");
}

#[tokio::test]
async fn test_transcript_is_sent_with_roles_mapped() {
    let mock_server = MockServer::start().await;

    // System first, prior turns in order, the new message last
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "You are VL Bot."},
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "Beep boop!"},
                {"role": "user", "content": "any hybrids?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Yes, one."}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transcript = vec![ChatMessage::user("hi"), ChatMessage::model("Beep boop!")];
    let client = client_for(&mock_server);
    let reply = client
        .reply("any hybrids?", &transcript, "You are VL Bot.")
        .await
        .unwrap();
    assert_eq!(reply, "Yes, one.");
}

#[tokio::test]
async fn test_api_error_surfaces_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.reply("hi", &[], "sys").await.unwrap_err();
    match err {
        ChatError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_choices_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.reply("hi", &[], "sys").await.unwrap_err();
    assert!(matches!(err, ChatError::Parse(_)));
}

#[tokio::test]
async fn test_offline_client_always_replies_with_sentinel() {
    let client = OfflineClient;
    let reply = client.reply("anything", &[], "sys").await.unwrap();
    assert!(reply.starts_with(OFFLINE_SENTINEL));
}
