//! Telegram notifier against a local stub Bot API

mod common;

use common::{refused_url, Script, TELEGRAM_CHAT_NOT_FOUND, TELEGRAM_OK, TEST_TIMEOUT};
use homework_relay::{ErrorCategory, ErrorCode, Notifier, TelegramNotifier};

const TEXT: &str = "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером.";

#[tokio::test]
async fn test_sends_text_to_chat() {
    let server = Script::new().bot(200, TELEGRAM_OK).serve().await;
    let notifier =
        TelegramNotifier::with_api_url(server.bot_api_url(), "123:abc", "4242", TEST_TIMEOUT)
            .unwrap();

    notifier.send_message(TEXT).await.unwrap();

    let requests = server.bot_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.token.as_deref(), Some("123:abc"));
    assert!(request
        .method
        .as_deref()
        .is_some_and(|m| m.eq_ignore_ascii_case("sendMessage")));
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["chat_id"], 4242);
    assert_eq!(body["text"], TEXT);
}

#[tokio::test]
async fn test_channel_username_is_sent_as_string() {
    let server = Script::new().bot(200, TELEGRAM_OK).serve().await;
    let notifier =
        TelegramNotifier::with_api_url(server.bot_api_url(), "t", "@homework_news", TEST_TIMEOUT)
            .unwrap();

    notifier.send_message(TEXT).await.unwrap();

    let requests = server.bot_requests();
    assert_eq!(requests[0].body.as_ref().unwrap()["chat_id"], "@homework_news");
}

#[tokio::test]
async fn test_rejection_is_delivery_error() {
    let server = Script::new().bot(400, TELEGRAM_CHAT_NOT_FOUND).serve().await;
    let notifier =
        TelegramNotifier::with_api_url(server.bot_api_url(), "t", "1", TEST_TIMEOUT).unwrap();

    let err = notifier.send_message(TEXT).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::TelegramSendFailed);
    assert_eq!(err.category(), ErrorCategory::Delivery);
    assert!(err.message.contains("chat not found"));
}

#[tokio::test]
async fn test_ok_false_with_200_still_fails() {
    let server = Script::new().bot(200, r#"{"ok":false}"#).serve().await;
    let notifier =
        TelegramNotifier::with_api_url(server.bot_api_url(), "t", "1", TEST_TIMEOUT).unwrap();

    let err = notifier.send_message(TEXT).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::TelegramSendFailed);
}

#[tokio::test]
async fn test_unreachable_bot_api() {
    let url = refused_url().await;
    let notifier = TelegramNotifier::with_api_url(&url, "t", "1", TEST_TIMEOUT).unwrap();

    let err = notifier.send_message(TEXT).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::TelegramSendFailed);
}
