//! Lookup tests against a mocked DGII endpoint. No live network access.

use std::time::Duration;

use dnid_dgii::{DgiiClient, DgiiError, RegistrationLookup};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn soap_body(result: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body><GetContribuyentesResponse xmlns=\"http://dgii.gov.do/\">\
         <GetContribuyentesResult>{result}</GetContribuyentesResult>\
         </GetContribuyentesResponse></soap:Body></soap:Envelope>"
    )
}

async fn client_for(server: &MockServer) -> DgiiClient {
    DgiiClient::with_endpoint(
        format!("{}/wsMovilDGII/WSMovilDGII.asmx", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_lookup_known_number() {
    let server = MockServer::start().await;

    let payload = "{&quot;RGE_RUC&quot;:&quot;00113918205&quot;,\
                   &quot;RGE_NOMBRE&quot;:&quot;JUAN PEREZ&quot;,\
                   &quot;NOMBRE_COMERCIAL&quot;:&quot;&quot;,\
                   &quot;CATEGORIA&quot;:&quot;0&quot;,\
                   &quot;REGIMEN_PAGOS&quot;:&quot;2&quot;,\
                   &quot;ESTATUS&quot;:&quot;2&quot;}";

    Mock::given(method("POST"))
        .and(path("/wsMovilDGII/WSMovilDGII.asmx"))
        .and(header("SOAPAction", "http://dgii.gov.do/GetContribuyentes"))
        .and(body_string_contains("<value>00113918205</value>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_body(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    // separators are compacted before the query is sent
    let info = client.lookup("001-1391820-5").await.unwrap().unwrap();

    assert_eq!(info.cedula, "00113918205");
    assert_eq!(info.name, "JUAN PEREZ");
    assert_eq!(info.commercial_name, None);
    assert_eq!(info.status, "2");
    assert_eq!(info.category, "0");
    assert_eq!(info.payment_regime, "2");
}

#[tokio::test]
async fn test_lookup_unknown_number_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_body("0")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let info = client.lookup("00000000000").await.unwrap();
    assert!(info.is_none());
}

#[tokio::test]
async fn test_lookup_rejects_unexpected_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.lookup("00113918205").await;
    assert!(matches!(result, Err(DgiiError::UnexpectedEnvelope(_))));
}

#[tokio::test]
async fn test_lookup_rejects_malformed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_body("{not json")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.lookup("00113918205").await;
    assert!(matches!(result, Err(DgiiError::MalformedPayload(_))));
}

#[tokio::test]
async fn test_lookup_surfaces_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.lookup("00113918205").await;
    assert!(matches!(result, Err(DgiiError::Http(_))));
}
