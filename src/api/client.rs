//! Icon image HTTP client.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::url::build_icon_url_with_base;
use crate::config::HttpConfig;
use crate::error::{Error, Result};

/// Something that can fetch an icon into a local file.
///
/// The worker pool only depends on this trait, so it can be driven by the
/// real HTTP client or by an in-memory stand-in.
#[async_trait]
pub trait IconFetcher: Send + Sync {
    /// Fetch `icon` and write it to `dest`, returning the bytes written.
    async fn fetch(&self, icon: &str, dest: &Path) -> Result<u64>;
}

/// HTTP client for the image host.
pub struct IconClient {
    client: Client,
    base_url: String,
}

impl IconClient {
    /// Create a new client from the HTTP configuration.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let accept = header::HeaderValue::from_str(&config.accept).map_err(|e| {
            Error::ConfigValidation {
                field: "accept".to_string(),
                message: e.to_string(),
            }
        })?;
        headers.insert(header::ACCEPT, accept);

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Download `url` into a newly created file at `dest`.
    ///
    /// Only a `200 OK` counts as success; any other status fails without
    /// touching `dest`. The file is flushed and closed before this returns,
    /// and removed again if the body could not be written completely.
    pub async fn download_image(&self, url: &str, dest: &Path) -> Result<u64> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut file = File::create(dest).await?;
        let written = async {
            let mut stream = response.bytes_stream();
            let mut written: u64 = 0;

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
                file.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }

            file.flush().await?;
            file.sync_all().await?;
            Ok::<u64, Error>(written)
        }
        .await;
        drop(file);

        match written {
            Ok(written) => Ok(written),
            Err(e) => {
                if let Err(remove_err) = tokio::fs::remove_file(dest).await {
                    tracing::debug!(
                        "Failed to remove partial file {}: {}",
                        dest.display(),
                        remove_err
                    );
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl IconFetcher for IconClient {
    async fn fetch(&self, icon: &str, dest: &Path) -> Result<u64> {
        let url = build_icon_url_with_base(&self.base_url, icon);
        self.download_image(&url, dest).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer) -> HttpConfig {
        HttpConfig {
            base_url: format!("{}/images", server.uri()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_download_success_writes_body() {
        let mock_server = MockServer::start().await;
        let body: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

        Mock::given(method("GET"))
            .and(path("/images/Coins"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Coins");
        let client = IconClient::new(&test_config(&mock_server)).unwrap();

        let url = format!("{}/images/Coins", mock_server.uri());
        let written = client.download_image(&url, &dest).await.unwrap();

        assert_eq!(written, body.len() as u64);
        assert_eq!(std::fs::read(&dest).unwrap(), body);
    }

    #[tokio::test]
    async fn test_download_non_200_leaves_no_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/images/Missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/images/Empty"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let client = IconClient::new(&test_config(&mock_server)).unwrap();

        let dest = dir.path().join("Missing");
        let err = client.fetch("Missing", &dest).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
        assert!(!dest.exists());

        // Any 2xx other than 200 is a failure too.
        let dest = dir.path().join("Empty");
        let err = client.fetch("Empty", &dest).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 204, .. }));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_fetch_sends_identifying_headers() {
        let mock_server = MockServer::start().await;
        let config = HttpConfig {
            accept: "image/png".into(),
            ..test_config(&mock_server)
        };

        Mock::given(method("GET"))
            .and(path("/images/Rune_scimitar"))
            .and(header_eq("user-agent", config.user_agent.as_str()))
            .and(header_eq("accept", config.accept.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png".to_vec()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Rune scimitar");
        let client = IconClient::new(&config).unwrap();

        assert_eq!(client.fetch("Rune scimitar", &dest).await.unwrap(), 3);
        assert!(dest.exists());
    }

    #[tokio::test]
    async fn test_download_overwrites_existing_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/images/Shark"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"new".to_vec()))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Shark");
        std::fs::write(&dest, b"old content that is longer").unwrap();

        let client = IconClient::new(&test_config(&mock_server)).unwrap();
        client.fetch("Shark", &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_connection_error() {
        // Bind and release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = HttpConfig {
            base_url: format!("http://127.0.0.1:{}/images", port),
            timeout_seconds: 5,
            ..Default::default()
        };

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Coins");
        let client = IconClient::new(&config).unwrap();

        let err = client.fetch("Coins", &dest).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_truncated_body_removes_partial_file() {
        use tokio::io::AsyncReadExt;
        use tokio::net::TcpListener;

        // Announce more bytes than are sent, then hang up.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\nabc")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let config = HttpConfig {
            base_url: format!("http://{}/images", addr),
            timeout_seconds: 5,
            ..Default::default()
        };

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Coins");
        let client = IconClient::new(&config).unwrap();

        let err = client.fetch("Coins", &dest).await.unwrap_err();
        assert!(matches!(err, Error::Download(_)));
        assert!(!dest.exists());

        server.await.unwrap();
    }

    #[test]
    fn test_invalid_accept_header() {
        let config = HttpConfig {
            accept: "image/png\n".into(),
            ..Default::default()
        };
        assert!(IconClient::new(&config).is_err());
    }
}
