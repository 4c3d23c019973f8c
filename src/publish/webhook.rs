//! Discord webhook client with rate-limit backoff.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::error::{Error, Result};
use crate::publish::embed::{Embed, WebhookPayload};

/// Upper bound on consecutive 429 retries for one batch.
const MAX_RATE_LIMIT_RETRIES: u32 = 10;

/// Backoff applied when a 429 body carries no usable retry_after.
const DEFAULT_RETRY_AFTER_SECS: f64 = 1.0;

/// Client for posting embed batches to a Discord webhook.
pub struct WebhookClient {
    client: Client,
    webhook_url: String,
}

impl WebhookClient {
    /// Create a new webhook client for a validated webhook URL.
    pub fn new(webhook_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Publish(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Post one batch of embeds.
    ///
    /// On 429 the server-provided retry_after is honored and the same
    /// batch is retried, up to [`MAX_RATE_LIMIT_RETRIES`] times. Any
    /// other failure propagates; the caller drops the batch (at-most-once
    /// delivery).
    pub async fn post_batch(&self, embeds: &[Embed]) -> Result<()> {
        let payload = WebhookPayload::new(embeds.to_vec());

        for _ in 0..MAX_RATE_LIMIT_RETRIES {
            let response = self
                .client
                .post(&self.webhook_url)
                .json(&payload)
                .send()
                .await?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                let body = response.text().await.unwrap_or_default();
                let wait_secs = parse_retry_after(&body);
                tracing::debug!("Rate limited, retrying in {:.1}s", wait_secs);
                sleep(Duration::from_secs_f64(wait_secs)).await;
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Publish(format!("HTTP {}: {}", status, body)));
            }

            return Ok(());
        }

        Err(Error::RateLimitExhausted(MAX_RATE_LIMIT_RETRIES))
    }
}

/// Extract the retry_after seconds from a 429 response body.
///
/// Discord sends a number, but string-encoded values are coerced too.
pub fn parse_retry_after(body: &str) -> f64 {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            let value = v.get("retry_after")?;
            value
                .as_f64()
                .or_else(|| value.as_str()?.parse::<f64>().ok())
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::embed::image_embed;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    #[test]
    fn test_parse_retry_after_present() {
        assert_eq!(parse_retry_after(r#"{"retry_after": 2.5}"#), 2.5);
        assert_eq!(parse_retry_after(r#"{"retry_after": 3}"#), 3.0);
    }

    #[test]
    fn test_parse_retry_after_string_value() {
        assert_eq!(parse_retry_after(r#"{"retry_after": "2.5"}"#), 2.5);
        assert_eq!(
            parse_retry_after(r#"{"retry_after": "abc"}"#),
            DEFAULT_RETRY_AFTER_SECS
        );
    }

    #[test]
    fn test_parse_retry_after_defaults_on_garbage() {
        assert_eq!(parse_retry_after("not json"), DEFAULT_RETRY_AFTER_SECS);
        assert_eq!(parse_retry_after("{}"), DEFAULT_RETRY_AFTER_SECS);
        assert_eq!(parse_retry_after(""), DEFAULT_RETRY_AFTER_SECS);
    }

    /// Read one full HTTP request (headers plus content-length body).
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);

                if buf.len() >= header_end + 4 + content_length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Serve canned raw responses, one connection each, returning the
    /// request bodies seen.
    async fn serve(listener: TcpListener, responses: Vec<String>) -> Vec<String> {
        let mut bodies = Vec::new();
        for response in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let body_start = request.find("\r\n\r\n").map(|i| i + 4).unwrap_or(0);
            bodies.push(request[body_start..].to_string());
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
        bodies
    }

    fn rate_limited_response(retry_after: &str) -> String {
        let body = format!(r#"{{"retry_after": {}}}"#, retry_after);
        format!(
            "HTTP/1.1 429 Too Many Requests\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    fn response(status_line: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status_line
        )
    }

    #[tokio::test]
    async fn test_post_batch_retries_same_batch_after_rate_limit() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // First POST is rate limited, second succeeds
        let server = tokio::spawn(serve(
            listener,
            vec![rate_limited_response("0.01"), response("200 OK")],
        ));

        let client = WebhookClient::new(format!("http://{}/webhook", addr)).unwrap();
        let batch = vec![image_embed("https://x/a.jpg".to_string())];
        client.post_batch(&batch).await.unwrap();

        // Exactly two requests, carrying the identical payload
        let bodies = server.await.unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0], bodies[1]);
        assert!(bodies[0].contains("https://x/a.jpg"));
    }

    #[tokio::test]
    async fn test_post_batch_gives_up_after_retry_budget() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let responses = (0..MAX_RATE_LIMIT_RETRIES)
            .map(|_| rate_limited_response("0.01"))
            .collect();
        let server = tokio::spawn(serve(listener, responses));

        let client = WebhookClient::new(format!("http://{}/webhook", addr)).unwrap();
        let batch = vec![image_embed("https://x/a.jpg".to_string())];
        let err = client.post_batch(&batch).await.unwrap_err();

        assert!(matches!(err, Error::RateLimitExhausted(_)));
        // The budget bounds the request count
        assert_eq!(server.await.unwrap().len() as u32, MAX_RATE_LIMIT_RETRIES);
    }

    #[tokio::test]
    async fn test_post_batch_propagates_non_rate_limit_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(serve(listener, vec![response("400 Bad Request")]));

        let client = WebhookClient::new(format!("http://{}/webhook", addr)).unwrap();
        let batch = vec![image_embed("https://x/a.jpg".to_string())];
        let err = client.post_batch(&batch).await.unwrap_err();

        assert!(matches!(err, Error::Publish(_)));
        assert_eq!(server.await.unwrap().len(), 1);
    }
}
