use std::future::Future;

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{error::AppError, profile::Profile, settings::Settings};

/// Anything that can resolve a username into a profile
pub trait ProfileSource {
    /// Looks up a single profile
    fn fetch_profile(&self, username: &str) -> impl Future<Output = Result<Profile, AppError>>;
}

/// Client for the GitHub users endpoint
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_base: String,
}

impl GithubClient {
    /// Creates a client with the headers GitHub expects
    ///
    /// # Arguments
    /// * `settings` - Validated settings (API base, user agent)
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent)
                .map_err(|e| AppError::Validation(format!("invalid user agent: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let http: Client = Client::builder().default_headers(headers).build()?;
        Ok(Self::with_http(http, &settings.api_base))
    }

    /// Wraps an already configured HTTP client
    pub fn with_http(http: Client, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the lookup URL with the username substituted verbatim
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{username}", self.api_base)
    }
}

impl ProfileSource for GithubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, AppError> {
        let url: String = self.profile_url(username);
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status: StatusCode = response.status();
        let body: String = response.text().await?;

        // Parsed before the status check: a non-JSON error page fails here.
        let json: serde_json::Value = serde_json::from_str(&body)?;

        if !status.is_success() {
            return Err(AppError::UserNotFound(status));
        }

        Ok(serde_json::from_value(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    const OCTOCAT: &str = r#"{"avatar_url":"https://x/a.png","name":"The Octocat","public_repos":"8","created_at":"2011-01-25T18:44:36Z","html_url":"https://github.com/octocat"}"#;

    /// Serves one canned response and yields the request line it received
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{addr}"), handle)
    }

    fn client(api_base: &str) -> GithubClient {
        let http = Client::builder().no_proxy().build().unwrap();
        GithubClient::with_http(http, api_base)
    }

    #[test]
    fn profile_url_substitutes_username_verbatim() {
        let client = client("https://api.github.com/");
        assert_eq!(
            client.profile_url("octocat"),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client.profile_url("a.b-c_d"),
            "https://api.github.com/users/a.b-c_d"
        );
    }

    #[test]
    fn new_rejects_unusable_user_agent() {
        let settings = Settings {
            user_agent: "bad\nagent".to_string(),
            ..Settings::default()
        };
        assert!(matches!(GithubClient::new(&settings), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn success_response_yields_profile() {
        let (base, server) = serve_once("200 OK", OCTOCAT).await;

        let profile = client(&base).fetch_profile("octocat").await.unwrap();

        assert_eq!(server.await.unwrap(), "GET /users/octocat HTTP/1.1");
        assert_eq!(profile.display_name(), "The Octocat");
        assert_eq!(profile.public_repos, "8");
        assert_eq!(profile.join_year(), 2011);
        assert_eq!(profile.html_url, "https://github.com/octocat");
    }

    #[tokio::test]
    async fn not_found_status_is_user_not_found() {
        let (base, server) = serve_once("404 Not Found", r#"{"message":"Not Found"}"#).await;

        let result = client(&base).fetch_profile("nobody").await;

        assert_eq!(server.await.unwrap(), "GET /users/nobody HTTP/1.1");
        assert!(matches!(result, Err(AppError::UserNotFound(StatusCode::NOT_FOUND))));
    }

    #[tokio::test]
    async fn rate_limit_collapses_into_user_not_found() {
        let (base, _server) = serve_once("403 Forbidden", r#"{"message":"API rate limit exceeded"}"#).await;

        let result = client(&base).fetch_profile("octocat").await;

        assert!(matches!(result, Err(AppError::UserNotFound(StatusCode::FORBIDDEN))));
    }

    #[tokio::test]
    async fn non_json_error_body_masks_status() {
        let (base, _server) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;

        let result = client(&base).fetch_profile("octocat").await;

        assert!(matches!(result, Err(AppError::SerdeJson(_))));
    }

    #[tokio::test]
    async fn success_without_profile_fields_is_json_error() {
        let (base, _server) = serve_once("200 OK", r#"{"login":"octocat"}"#).await;

        let result = client(&base).fetch_profile("octocat").await;

        assert!(matches!(result, Err(AppError::SerdeJson(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client(&format!("http://{addr}")).fetch_profile("octocat").await;

        assert!(matches!(result, Err(AppError::Http(_))));
    }
}
