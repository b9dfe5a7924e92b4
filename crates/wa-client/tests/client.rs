//! End-to-end client tests against a local mock server.

use mockito::Matcher;
use pretty_assertions::assert_eq;
use wa_client::{
    DecodeError, Params, RecognizerMode, ResponseFormat, Units, WolframClient, WolframError,
};

const APP_ID: &str = "TEST-APPID";
const PI_JSON: &str = include_str!("fixtures/pi.json");
const PI_XML: &str = include_str!("fixtures/pi.xml");

fn client_for(server: &mockito::Server) -> WolframClient {
    WolframClient::builder(APP_ID)
        .api_base(server.url())
        .recognizer_base(server.url())
        .build()
        .expect("client builds")
}

fn param(key: &str, value: &str) -> Matcher {
    Matcher::UrlEncoded(key.into(), value.into())
}

#[tokio::test]
async fn query_decodes_json_and_records_input() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/query")
        .match_query(Matcher::AllOf(vec![
            param("input", "what is pi?"),
            param("appid", APP_ID),
            param("output", "json"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PI_JSON)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.query("what is pi?", &Params::new()).await.unwrap();

    assert_eq!(result.query, "what is pi?");
    assert_eq!(result.pods.len(), 3);
    assert_eq!(result.pods[0].subpods[0].plaintext, "pi");
    mock.assert_async().await;
}

#[tokio::test]
async fn query_as_xml_forwards_extra_params() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/query")
        .match_query(Matcher::AllOf(vec![
            param("input", "pi & e"),
            param("output", "xml"),
            param("format", "plaintext,image"),
            param("podstate", "DecimalApproximation__More digits"),
        ]))
        .with_status(200)
        .with_header("content-type", "text/xml;charset=utf-8")
        .with_body(PI_XML)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = Params::new()
        .with("format", "plaintext,image")
        .with("podstate", "DecimalApproximation__More digits");
    let result = client
        .query_as("pi & e", ResponseFormat::Xml, &params)
        .await
        .unwrap();

    assert_eq!(result.num_pods, 3);
    assert_eq!(
        result.primary_pod().map(|pod| pod.title.as_str()),
        Some("Decimal approximation")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<queryresult success='true'><pod title='Result'>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .query_as("2+2", ResponseFormat::Xml, &Params::new())
        .await
        .unwrap_err();

    assert!(!err.is_transport());
    assert!(matches!(err, WolframError::Decode(DecodeError::Xml { .. })), "{err}");
}

#[tokio::test]
async fn error_status_surfaces_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/query")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("Error 1: Invalid appid")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.query("2+2", &Params::new()).await.unwrap_err();

    assert!(err.is_transport());
    match err {
        WolframError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Error 1: Invalid appid");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn short_answer_sends_units_and_timeout() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/result")
        .match_query(Matcher::AllOf(vec![
            param("appid", APP_ID),
            param("i", "mass of the sun"),
            param("units", "imperial"),
            param("timeout", "7"),
        ]))
        .with_status(200)
        .with_body("4.384 × 10^30 pounds")
        .create_async()
        .await;

    let client = client_for(&server);
    let answer = client
        .short_answer("mass of the sun", Units::Imperial, Some(7))
        .await
        .unwrap();

    assert_eq!(answer, "4.384 × 10^30 pounds");
    mock.assert_async().await;
}

#[tokio::test]
async fn spoken_answer_omits_zero_timeout() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/spoken")
        .match_query(Matcher::Exact(format!(
            "appid={APP_ID}&i=price%20of%20gold&units=metric"
        )))
        .with_status(200)
        .with_body("The price of gold is about $2,400 per troy ounce")
        .create_async()
        .await;

    let client = client_for(&server);
    let answer = client
        .spoken_answer("price of gold", Units::Metric, Some(0))
        .await
        .unwrap();

    assert!(answer.starts_with("The price of gold"));
    mock.assert_async().await;
}

#[tokio::test]
async fn short_answer_not_available() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/result")
        .match_query(Matcher::Any)
        .with_status(501)
        .with_body("No short answer available")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .short_answer("tell me a story", Units::Metric, None)
        .await
        .unwrap_err();
    assert!(matches!(err, WolframError::Api { status: 501, .. }));
}

#[tokio::test]
async fn simple_returns_image_bytes() {
    let mut server = mockito::Server::new_async().await;
    let gif = b"GIF89a\x01\x00\x01\x00".to_vec();
    let mock = server
        .mock("GET", "/v1/simple")
        .match_query(Matcher::AllOf(vec![
            param("i", "sine curve"),
            param("background", "F5F5F5"),
        ]))
        .with_status(200)
        .with_header("content-type", "image/gif")
        .with_body(gif.clone())
        .create_async()
        .await;

    let client = client_for(&server);
    let image = client
        .simple("sine curve", &Params::new().with("background", "F5F5F5"))
        .await
        .unwrap();

    assert_eq!(image.bytes, gif);
    assert_eq!(image.content_type.as_deref(), Some("image/gif"));
    assert!(image.url.starts_with(&server.url()));
    assert!(image.url.contains("i=sine%20curve"));
    mock.assert_async().await;
}

#[tokio::test]
async fn recognize_uses_recognizer_host() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/queryrecognizer/query.jsp")
        .match_query(Matcher::AllOf(vec![
            param("mode", "Voice"),
            param("i", "gold price"),
            param("output", "json"),
        ]))
        .with_status(200)
        .with_body(
            r#"{"version":"0.2","spellingCorrection":"false","buildnumber":"1",
                "query":[{"i":"gold price","accepted":"true","timing":"1.2","domain":"finance",
                "resultsignificancescore":"90"}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .recognize("gold price", RecognizerMode::Voice)
        .await
        .unwrap();

    assert_eq!(result.queries.len(), 1);
    assert!(result.queries[0].is_accepted());
    assert_eq!(result.queries[0].domain, "finance");
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = WolframClient::builder(APP_ID)
        .api_base("http://127.0.0.1:1")
        .build()
        .unwrap();
    let err = client.query("2+2", &Params::new()).await.unwrap_err();
    assert!(matches!(err, WolframError::Http(_)), "{err}");
    assert!(err.is_transport());

    let chain = format!("{err} {:?}", std::error::Error::source(&err));
    assert!(!chain.contains(APP_ID), "{chain}");
}
