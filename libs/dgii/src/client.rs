//! SOAP client for the DGII `WSMovilDGII` service.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::DgiiError;
use crate::types::{ContribuyenteRow, RegistrationInfo};

/// Production endpoint of the DGII mobile web service.
pub const DEFAULT_ENDPOINT: &str = "https://dgii.gov.do/wsMovilDGII/WSMovilDGII.asmx";

/// SOAPAction header value for the contribuyente query.
const SOAP_ACTION: &str = "http://dgii.gov.do/GetContribuyentes";

/// Default request timeout, matching the service's documented default.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A service that resolves a cedula to its registration record.
///
/// Implemented by [`DgiiClient`]; consumers should accept this trait so the
/// network dependency can be stubbed out in tests.
#[async_trait]
pub trait RegistrationLookup {
    /// Looks up the number, returning `None` when the service does not know
    /// it (invalid or unregistered).
    async fn lookup(&self, cedula: &str) -> Result<Option<RegistrationInfo>, DgiiError>;
}

/// Client for the DGII online validation service.
///
/// The service is keyed by RNC but answers cedula queries through the same
/// operation; the response's RNC field carries the requested cedula.
#[derive(Debug, Clone)]
pub struct DgiiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DgiiClient {
    /// Creates a client against the production endpoint with the default
    /// 30-second timeout.
    pub fn new() -> Result<Self, DgiiError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Creates a client against a specific endpoint URL with the given
    /// request timeout.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DgiiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn envelope(number: &str) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="utf-8"?>"#,
                r#"<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
                r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
                r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
                "<soap:Body>",
                r#"<GetContribuyentes xmlns="http://dgii.gov.do/">"#,
                "<value>{number}</value>",
                "<patronBusqueda>0</patronBusqueda>",
                "<inicioFilas>1</inicioFilas>",
                "<filaFilas>1</filaFilas>",
                "<IMEI></IMEI>",
                "</GetContribuyentes>",
                "</soap:Body>",
                "</soap:Envelope>"
            ),
            number = number
        )
    }
}

#[async_trait]
impl RegistrationLookup for DgiiClient {
    async fn lookup(&self, cedula: &str) -> Result<Option<RegistrationInfo>, DgiiError> {
        let number = dnid_cedula::compact(cedula);
        debug!(number = %number, endpoint = %self.endpoint, "Querying DGII");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", SOAP_ACTION)
            .body(Self::envelope(&number))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let payload = extract_result(&body)?;
        let payload = unescape_xml(payload.trim());

        // the service answers "0" for unknown or invalid numbers
        if payload.is_empty() || payload == "0" {
            debug!(number = %number, "DGII reported no registration");
            return Ok(None);
        }

        let row = parse_rows(&payload)?;
        Ok(row.map(RegistrationInfo::from))
    }
}

/// Pulls the text of the `GetContribuyentesResult` element out of the SOAP
/// response body.
fn extract_result(body: &str) -> Result<&str, DgiiError> {
    const OPEN: &str = "<GetContribuyentesResult>";
    const CLOSE: &str = "</GetContribuyentesResult>";

    let start = body
        .find(OPEN)
        .map(|i| i + OPEN.len())
        .ok_or_else(|| envelope_error(body))?;
    let end = body[start..]
        .find(CLOSE)
        .map(|i| start + i)
        .ok_or_else(|| envelope_error(body))?;
    Ok(&body[start..end])
}

fn envelope_error(body: &str) -> DgiiError {
    let snippet: String = body.chars().take(200).collect();
    DgiiError::UnexpectedEnvelope(snippet)
}

/// Resolves the five predefined XML entities. The embedded JSON payload is
/// XML-escaped inside the result element.
fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Parses the JSON payload, which is a single row object for exact-match
/// queries but may be a row array for pattern searches.
fn parse_rows(payload: &str) -> Result<Option<ContribuyenteRow>, serde_json::Error> {
    if payload.starts_with('[') {
        let mut rows: Vec<ContribuyenteRow> = serde_json::from_str(payload)?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    } else {
        serde_json::from_str(payload).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_carries_number_and_search_pattern() {
        let envelope = DgiiClient::envelope("00113918205");
        assert!(envelope.contains("<value>00113918205</value>"));
        assert!(envelope.contains("<patronBusqueda>0</patronBusqueda>"));
    }

    #[test]
    fn test_extract_result() {
        let body = "<x><GetContribuyentesResult>0</GetContribuyentesResult></x>";
        assert_eq!(extract_result(body).unwrap(), "0");
    }

    #[test]
    fn test_extract_result_rejects_missing_element() {
        let result = extract_result("<html>service down</html>");
        assert!(matches!(result, Err(DgiiError::UnexpectedEnvelope(_))));
    }

    #[test]
    fn test_unescape_xml_resolves_amp_last() {
        assert_eq!(unescape_xml("&amp;quot;"), "&quot;");
        assert_eq!(unescape_xml("&quot;a&quot;"), "\"a\"");
    }

    #[test]
    fn test_parse_rows_accepts_object_and_array() {
        let object = r#"{"RGE_RUC":"00113918205","RGE_NOMBRE":"JUAN PEREZ"}"#;
        assert!(parse_rows(object).unwrap().is_some());

        let array = r#"[{"RGE_RUC":"00113918205","RGE_NOMBRE":"JUAN PEREZ"}]"#;
        assert!(parse_rows(array).unwrap().is_some());

        assert!(parse_rows("[]").unwrap().is_none());
    }
}
