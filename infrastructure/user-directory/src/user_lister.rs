use async_trait::async_trait;

use business::domain::product::errors::ExternalServiceError;
use business::domain::product::services::{ExternalUser, ExternalUserService};

use crate::client::UserDirectoryClient;

pub struct UserListerHttp {
    client: UserDirectoryClient,
}

impl UserListerHttp {
    pub fn new(client: UserDirectoryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExternalUserService for UserListerHttp {
    async fn list_users(&self) -> Result<Vec<ExternalUser>, ExternalServiceError> {
        let response = self
            .client
            .client
            .get(&self.client.users_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, url = %self.client.users_url, "user directory unreachable");
                ExternalServiceError::ConnectionFailed
            })?;

        let status = response.status();
        if status.is_client_error() {
            return Err(ExternalServiceError::ClientError(status.as_u16()));
        }
        if !status.is_success() {
            return Err(ExternalServiceError::ServerError(status.as_u16()));
        }

        // A literal `null` body counts as an empty directory.
        let users: Option<Vec<ExternalUser>> = response
            .json()
            .await
            .map_err(|_| ExternalServiceError::MalformedResponse)?;

        Ok(users.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a random local port and returns its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/users", addr)
    }

    fn lister(url: String) -> UserListerHttp {
        // Local test servers must not be routed through an ambient HTTP proxy.
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        UserListerHttp::new(UserDirectoryClient {
            client,
            users_url: url,
        })
    }

    #[tokio::test]
    async fn should_return_users_when_directory_answers_with_array() {
        let url = serve_once("200 OK", r#"[{"id":1,"name":"Leanne Graham"},{"id":2}]"#).await;

        let users = lister(url).list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].0["name"], "Leanne Graham");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_body_is_null() {
        let url = serve_once("200 OK", "null").await;

        let users = lister(url).list_users().await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn should_report_client_error_when_status_is_4xx() {
        let url = serve_once("404 Not Found", "{}").await;

        let result = lister(url).list_users().await;

        assert!(matches!(result, Err(ExternalServiceError::ClientError(404))));
    }

    #[tokio::test]
    async fn should_report_server_error_when_status_is_5xx() {
        let url = serve_once("503 Service Unavailable", "").await;

        let result = lister(url).list_users().await;

        assert!(matches!(result, Err(ExternalServiceError::ServerError(503))));
    }

    #[tokio::test]
    async fn should_report_malformed_response_when_body_is_not_an_array() {
        let url = serve_once("200 OK", r#"{"users":"nope"}"#).await;

        let result = lister(url).list_users().await;

        assert!(matches!(result, Err(ExternalServiceError::MalformedResponse)));
    }

    #[tokio::test]
    async fn should_report_connection_failure_when_nothing_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = lister(format!("http://{}/users", addr)).list_users().await;

        assert!(matches!(result, Err(ExternalServiceError::ConnectionFailed)));
    }
}
