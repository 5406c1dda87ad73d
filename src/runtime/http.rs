//! HTTP transport for the catalog API
//!
//! Blocking reqwest client; it runs on the worker thread, never on the
//! thread that owns the screens.

use reqwest::blocking::Client;

use super::config::ApiSettings;
use crate::core::io_traits::{CatalogTransport, TransportError, TransportResponse};

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(settings: &ApiSettings) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl CatalogTransport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Transport that never goes through an environment proxy
    fn local_transport() -> HttpTransport {
        let settings = ApiSettings::default();
        let client = Client::builder()
            .no_proxy()
            .timeout(settings.request_timeout())
            .user_agent(settings.user_agent.as_str())
            .build()
            .unwrap();
        HttpTransport::from_client(client)
    }

    /// Serve one canned HTTP response on a local port and return the base URL
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_new_from_default_settings() {
        assert!(HttpTransport::new(&ApiSettings::default()).is_ok());
    }

    #[test]
    fn test_get_returns_status_and_body() {
        let (base, server) = serve_once("200 OK", r#"{"results":[]}"#);
        let transport = local_transport();

        let response = transport.get(&format!("{}/pokemon?limit=1&offset=0", base)).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"results":[]}"#);

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /pokemon?limit=1&offset=0 HTTP/1.1"));
        assert!(request.to_lowercase().contains("user-agent: pokedex-client/"));
    }

    #[test]
    fn test_non_success_status_is_not_an_error() {
        let (base, server) = serve_once("404 Not Found", "Not Found");
        let transport = local_transport();

        let response = transport.get(&format!("{}/pokemon/missingno", base)).unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        server.join().unwrap();
    }

    #[test]
    fn test_connection_refused_is_request_error() {
        // Bind then drop to get a port nothing listens on
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let transport = local_transport();

        let result = transport.get(&format!("http://{}/pokemon/1", addr));
        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
