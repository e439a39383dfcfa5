// Google provider HTTP contract tests against a mock server

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use mockito::{Matcher, Server};
use serde_json::{json, Value};
use tower::ServiceExt;
use translate_gateway::config::{AppConfig, ProviderConfig};
use translate_gateway::error::ProviderError;
use translate_gateway::gateway::Gateway;
use translate_gateway::provider::{self, GoogleTranslator, TranslationProvider};
use translate_gateway::server::create_router;

const PATH: &str = "/translate_a/single";

fn translator_for(server: &Server) -> GoogleTranslator {
    let config = ProviderConfig {
        base_url: server.url(),
        timeout_seconds: 5,
        ..ProviderConfig::default()
    };
    GoogleTranslator::new(&config).unwrap()
}

fn query(sl: &str, tl: &str, q: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("client".into(), "gtx".into()),
        Matcher::UrlEncoded("sl".into(), sl.into()),
        Matcher::UrlEncoded("tl".into(), tl.into()),
        Matcher::UrlEncoded("dt".into(), "t".into()),
        Matcher::UrlEncoded("q".into(), q.into()),
    ])
}

#[tokio::test]
async fn test_translates_single_segment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(query("en", "es", "hello"))
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(r#"[[["hola","hello",null,null,10]],null,"en",null,null,null,null,[]]"#)
        .create_async()
        .await;

    let translator = translator_for(&server);
    let result = translator.translate("hello", "en", "es").await.unwrap();

    assert_eq!(result, "hola");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_joins_multiple_segments() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(query("en", "fr", "Good morning. How are you?"))
        .with_status(200)
        .with_body(
            r#"[[["Bonjour. ","Good morning. ",null,null,10],["Comment allez-vous ?","How are you?",null,null,10]],null,"en"]"#,
        )
        .create_async()
        .await;

    let translator = translator_for(&server);
    let result = translator
        .translate("Good morning. How are you?", "en", "fr")
        .await
        .unwrap();

    assert_eq!(result, "Bonjour. Comment allez-vous ?");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_language_codes_are_normalized_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(query("auto", "zh-tw", "hello"))
        .with_status(200)
        .with_body(r#"[[["你好","hello",null,null,10]],null,"en"]"#)
        .create_async()
        .await;

    let translator = translator_for(&server);
    let result = translator.translate("hello", "AUTO", "zh_TW").await.unwrap();

    assert_eq!(result, "你好");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unsupported_language_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let translator = translator_for(&server);
    let err = translator.translate("hello", "en", "zz").await.unwrap_err();

    assert_eq!(
        err,
        ProviderError::UnsupportedLanguage {
            field: "target",
            code: "zz".to_string()
        }
    );

    let err = translator.translate("hello", "xx", "es").await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::UnsupportedLanguage { field: "source", .. }
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_text_short_circuits() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let translator = translator_for(&server);
    assert_eq!(translator.translate("", "en", "es").await.unwrap(), "");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_is_classified() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let translator = translator_for(&server);
    let err = translator.translate("hello", "en", "es").await.unwrap_err();
    assert_eq!(err, ProviderError::RateLimited("Too Many Requests".to_string()));
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("backend down")
        .create_async()
        .await;

    let translator = translator_for(&server);
    let err = translator.translate("hello", "en", "es").await.unwrap_err();
    assert_eq!(err, ProviderError::Unavailable("HTTP 503: backend down".to_string()));
}

#[tokio::test]
async fn test_other_status_is_upstream_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let translator = translator_for(&server);
    let err = translator.translate("hello", "en", "es").await.unwrap_err();
    assert_eq!(
        err,
        ProviderError::Upstream {
            status: 403,
            message: "forbidden".to_string()
        }
    );
}

#[tokio::test]
async fn test_unexpected_payload_is_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>captcha</html>")
        .create_async()
        .await;

    let translator = translator_for(&server);
    let err = translator.translate("hello", "en", "es").await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let config = ProviderConfig {
        // Port 9 (discard) is essentially never listening on loopback
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 5,
        ..ProviderConfig::default()
    };
    let translator = GoogleTranslator::new(&config).unwrap();
    let err = translator.translate("hello", "en", "es").await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)));
}

#[tokio::test]
async fn test_full_stack_through_router() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(query("en", "es", "hello"))
        .with_status(200)
        .with_body(r#"[[["hola","hello",null,null,10]],null,"en"]"#)
        .create_async()
        .await;

    let mut config = AppConfig::default();
    config.provider.base_url = server.url();
    let provider = provider::from_config(&config.provider).unwrap();
    let gateway = Gateway::new(provider, config.provider.timeout_seconds);
    let router = create_router(config, gateway).unwrap();

    let ok = Request::builder()
        .method(Method::POST)
        .uri("/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text": "hello", "source": "en", "target": "es"}"#))
        .unwrap();
    let response = router.clone().oneshot(ok).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "translatedText": "hola" }));

    let unsupported = Request::builder()
        .method(Method::POST)
        .uri("/translate")
        .body(Body::from(r#"{"text": "hello", "source": "en", "target": "zz"}"#))
        .unwrap();
    let response = router.oneshot(unsupported).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["type"], "unsupported_language");
}
