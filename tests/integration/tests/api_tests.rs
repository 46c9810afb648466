//! Action endpoint integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_action_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.action("drop_tables", &json!({})).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorEnvelope = response.json().await.unwrap();
    assert_eq!(body.error, "Action not found");
}

#[tokio::test]
async fn test_missing_action_param_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let url = format!("{}/", server.base_url());
    let response = server.client.post(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_preflight_is_answered_by_cors_layer() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.preflight("get_chats").await.unwrap();
    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert_eq!(headers.get("access-control-max-age").unwrap(), "86400");
    let methods = headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_preflight_honors_configured_origins() {
    if !check_test_env() {
        return;
    }

    let mut config = test_config().expect("Failed to load config");
    config.cors.allowed_origins = vec!["https://app.example.com".to_string()];
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    // A listed origin is echoed back instead of the wildcard
    let response = server.preflight("get_chats").await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "https://app.example.com"
    );
}

// ============================================================================
// Registration and Login Tests
// ============================================================================

#[tokio::test]
async fn test_register_returns_public_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = RegisterPayload::unique();

    let response = server.action("register", &payload).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["username"], payload.username);
    assert_eq!(body["user"]["displayName"], payload.display_name);
    // The credential digest never appears in responses
    let user_keys: Vec<_> = body["user"].as_object().unwrap().keys().cloned().collect();
    assert!(user_keys.iter().all(|k| !k.to_lowercase().contains("password")));
}

#[tokio::test]
async fn test_register_creates_pinned_saved_chat() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = RegisterPayload::unique();

    let response = server.action("register", &payload).await.unwrap();
    let auth: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(auth.success);

    let response = server
        .action("get_chats", &json!({ "userId": auth.user.id }))
        .await
        .unwrap();
    let chats: ChatsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let saved: Vec<_> = chats
        .chats
        .iter()
        .filter(|c| c.kind == "saved")
        .collect();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].is_pinned, Some(true));
    assert_eq!(saved[0].unread_count, 0);
    assert!(saved[0].last_message.is_none());
}

#[tokio::test]
async fn test_register_duplicate_username_is_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = RegisterPayload::unique();

    let response = server.action("register", &payload).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let mut duplicate = RegisterPayload::unique();
    duplicate.username = payload.username.clone();
    let response = server.action("register", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_missing_field_is_bad_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .action(
            "register",
            &json!({ "email": "a@b.c", "username": "nopassword" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterPayload::unique();

    let response = server.action("register", &register).await.unwrap();
    let registered: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .action("login", &LoginPayload::from_register(&register))
        .await
        .unwrap();
    let logged_in: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(logged_in.success);
    assert_eq!(logged_in.user.id, registered.user.id);
    assert_eq!(logged_in.user.email, register.email);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterPayload::unique();
    server.action("register", &register).await.unwrap();

    let response = server
        .action(
            "login",
            &LoginPayload {
                username: register.username.clone(),
                password: "not the password".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Unknown username gets the same classification
    let response = server
        .action(
            "login",
            &LoginPayload {
                username: "no_such_user_anywhere".to_string(),
                password: "whatever".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Message Tests
// ============================================================================

async fn register_with_saved_chat(server: &TestServer) -> (i64, i64) {
    let response = server
        .action("register", &RegisterPayload::unique())
        .await
        .unwrap();
    let auth: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .action("get_chats", &json!({ "userId": auth.user.id }))
        .await
        .unwrap();
    let chats: ChatsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    let chat_id = chats
        .chats
        .iter()
        .find(|c| c.kind == "saved")
        .expect("saved chat must exist")
        .id;

    (auth.user.id, chat_id)
}

#[tokio::test]
async fn test_send_message_returns_full_record() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, chat_id) = register_with_saved_chat(&server).await;

    let response = server
        .action(
            "send_message",
            &json!({ "chatId": chat_id, "senderId": user_id, "content": "hello" }),
        )
        .await
        .unwrap();
    let sent: SentEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(sent.message.id > 0);
    assert_eq!(sent.message.chat_id, chat_id);
    assert_eq!(sent.message.sender_id, user_id);
    assert_eq!(sent.message.kind, "text");
    assert!(!sent.message.is_edited);
    assert!(sent.message.media_url.is_none());
}

#[tokio::test]
async fn test_messages_come_back_in_send_order() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, chat_id) = register_with_saved_chat(&server).await;

    let mut sent_ids = Vec::new();
    for i in 0..5 {
        let response = server
            .action(
                "send_message",
                &json!({ "chatId": chat_id, "senderId": user_id, "content": format!("message {i}") }),
            )
            .await
            .unwrap();
        let sent: SentEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
        sent_ids.push(sent.message.id);
    }

    let response = server
        .action("get_messages", &json!({ "chatId": chat_id }))
        .await
        .unwrap();
    let listed: MessagesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let listed_ids: Vec<_> = listed.messages.iter().map(|m| m.id).collect();
    assert_eq!(listed_ids, sent_ids);
    // No reactions exist, so the field is absent on every message
    assert!(listed.messages.iter().all(|m| m.reactions.is_none()));
}

#[tokio::test]
async fn test_get_messages_empty_chat_is_success() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, chat_id) = register_with_saved_chat(&server).await;

    let response = server
        .action("get_messages", &json!({ "chatId": chat_id }))
        .await
        .unwrap();
    let listed: MessagesEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.messages.is_empty());
}

#[tokio::test]
async fn test_chat_aggregates_track_messages() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, chat_id) = register_with_saved_chat(&server).await;

    for content in ["first", "second", "third"] {
        server
            .action(
                "send_message",
                &json!({ "chatId": chat_id, "senderId": user_id, "content": content }),
            )
            .await
            .unwrap();
    }

    let response = server
        .action("get_chats", &json!({ "userId": user_id }))
        .await
        .unwrap();
    let chats: ChatsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    let saved = chats.chats.iter().find(|c| c.id == chat_id).unwrap();

    // unreadCount is the literal total message count
    assert_eq!(saved.unread_count, 3);
    assert_eq!(saved.last_message.as_deref(), Some("third"));
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile_is_sparse() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterPayload::unique();
    let response = server.action("register", &register).await.unwrap();
    let auth: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .action(
            "update_profile",
            &json!({ "userId": auth.user.id, "bio": "writing tests" }),
        )
        .await
        .unwrap();
    let updated: ProfileEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.user.bio.as_deref(), Some("writing tests"));
    // Untouched fields survive
    assert_eq!(updated.user.email, register.email);
    assert_eq!(updated.user.display_name, register.display_name);

    // The old password still works after a bio-only update
    let response = server
        .action("login", &LoginPayload::from_register(&register))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_explicit_null_clears_field() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterPayload::unique();
    let response = server.action("register", &register).await.unwrap();
    let auth: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .action(
            "update_profile",
            &json!({ "userId": auth.user.id, "avatar": "https://cdn.invalid/a.png" }),
        )
        .await
        .unwrap();
    let updated: ProfileEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.user.avatar.as_deref(), Some("https://cdn.invalid/a.png"));

    // A present-but-null field clears the stored value, it is not a no-op
    let response = server
        .action(
            "update_profile",
            &json!({ "userId": auth.user.id, "avatar": null }),
        )
        .await
        .unwrap();
    let updated: ProfileEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.user.avatar.is_none());
    assert_eq!(updated.user.email, register.email);
}

#[tokio::test]
async fn test_update_profile_empty_patch_is_bad_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_id, _) = register_with_saved_chat(&server).await;

    let response = server
        .action("update_profile", &json!({ "userId": user_id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_password_change() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterPayload::unique();
    let response = server.action("register", &register).await.unwrap();
    let auth: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .action(
            "update_profile",
            &json!({ "userId": auth.user.id, "password": "NewPass456!" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password rejected, new accepted
    let response = server
        .action("login", &LoginPayload::from_register(&register))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .action(
            "login",
            &LoginPayload {
                username: register.username.clone(),
                password: "NewPass456!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_users_excludes_requester() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterPayload::unique();
    let response = server.action("register", &register).await.unwrap();
    let auth: AuthEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    // Searching for their own exact username from another identity finds them
    let response = server
        .action(
            "search_users",
            &json!({ "query": register.username.to_uppercase(), "userId": -1 }),
        )
        .await
        .unwrap();
    let found: UsersEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(found.users.iter().any(|u| u.id == auth.user.id));

    // But never from their own
    let response = server
        .action(
            "search_users",
            &json!({ "query": register.username.clone(), "userId": auth.user.id }),
        )
        .await
        .unwrap();
    let found: UsersEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(found.users.iter().all(|u| u.id != auth.user.id));
}

#[tokio::test]
async fn test_search_users_caps_at_twenty() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A shared display-name marker across 25 users
    let marker = format!("Flock{}", unique_suffix());
    for _ in 0..25 {
        let mut payload = RegisterPayload::unique();
        payload.display_name = format!("{marker} member");
        let response = server.action("register", &payload).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .action("search_users", &json!({ "query": marker, "userId": -1 }))
        .await
        .unwrap();
    let found: UsersEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.users.len(), 20);
}
