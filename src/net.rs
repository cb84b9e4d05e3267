// src/net.rs
//
// Certificate fetching. One GET, no retry, no custom headers, reqwest's
// default timeout. Anything but a 2xx with a JSON array is a load failure.

use reqwest::blocking::Client;

use crate::{error::LoadError, model::Certificate};

/// Where certificates come from. The GUI and CLI use [`HttpSource`];
/// tests plug in canned sources.
pub trait CertificateSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Certificate>, LoadError>;
}

/// Decode a response body: a JSON array of certificates.
pub fn decode_certificates(body: &str) -> Result<Vec<Certificate>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self { url: url.into(), client }
    }
}

impl CertificateSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Certificate>, LoadError> {
        log::debug!("Load: GET {}", self.url);
        let resp = self.client.get(&self.url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = resp.text()?;
        let certs = decode_certificates(&body)?;
        log::debug!("Load: {} bytes → {} certificate(s)", body.len(), certs.len());
        Ok(certs)
    }
}

/// Canned result, handy for offline runs and tests.
impl CertificateSource for Vec<Certificate> {
    fn fetch(&self) -> Result<Vec<Certificate>, LoadError> {
        Ok(self.clone())
    }
}
