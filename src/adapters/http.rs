use crate::core::{
    ApiMessage, CommentRequest, ConfigProvider, Planet, PlanetApi, RegisterRequest,
};
use crate::domain::model::ApiErrorBody;
use crate::utils::error::{PlanetError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// JSON client for the planet server.
#[derive(Debug, Clone)]
pub struct HttpPlanetApi {
    client: Client,
    base_url: Url,
}

impl HttpPlanetApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        Self::with_client(builder.build()?, config.base_url())
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Relative joins below must keep any path prefix of the base.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    /// Joins like a browser resolving a relative link, so names are
    /// percent-encoded only where the URL grammar requires it.
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| status.to_string());
        tracing::warn!("Request rejected with {}: {}", status, message);

        Err(PlanetError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PlanetApi for HttpPlanetApi {
    async fn fetch_planets(&self) -> Result<Vec<Planet>> {
        let url = self.endpoint("planets")?;
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn submit_vote(&self, planet_name: &str) -> Result<ApiMessage> {
        let url = self.endpoint(&format!("vote/{}", planet_name))?;
        tracing::debug!("Posting vote to: {}", url);
        let response = self.client.post(url).send().await?;
        Self::read_json(response).await
    }

    async fn fetch_planet(&self, name: &str) -> Result<Planet> {
        let url = self.endpoint(&format!("api/planet/{}", name))?;
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn submit_comment(&self, request: &CommentRequest) -> Result<ApiMessage> {
        let url = self.endpoint("comment")?;
        tracing::debug!("Posting comment for {} to: {}", request.planet_name, url);
        let response = self.client.post(url).json(request).send().await?;
        Self::read_json(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage> {
        let url = self.endpoint("register")?;
        tracing::debug!("Registering {} at: {}", request.username, url);
        let response = self.client.post(url).json(request).send().await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_base_path_prefix_is_kept() {
        let api = HttpPlanetApi::new("http://localhost:5000/solar").unwrap();
        assert_eq!(
            api.endpoint("planets").unwrap().as_str(),
            "http://localhost:5000/solar/planets"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpPlanetApi::new("not a url"),
            Err(PlanetError::Url(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_planets_preserves_order() {
        let server = MockServer::start();
        let planets_mock = server.mock(|when, then| {
            when.method(GET).path("/planets");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"name": "Saturn", "description": "Ringed"},
                    {"name": "Earth", "description": "Home"}
                ]));
        });

        let api = HttpPlanetApi::new(&server.base_url()).unwrap();
        let planets = api.fetch_planets().await.unwrap();

        planets_mock.assert();
        assert_eq!(planets[0].name, "Saturn");
        assert_eq!(planets[1].name, "Earth");
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/planets");
            then.status(200).body("<html>oops</html>");
        });

        let api = HttpPlanetApi::new(&server.base_url()).unwrap();
        let err = api.fetch_planets().await.unwrap_err();

        assert!(matches!(err, PlanetError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_error_body_becomes_rejection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/planet/Pluto");
            then.status(404)
                .json_body(serde_json::json!({"error": "Planet not found"}));
        });

        let api = HttpPlanetApi::new(&server.base_url()).unwrap();
        let err = api.fetch_planet("Pluto").await.unwrap_err();

        match err {
            PlanetError::Rejected { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Planet not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_vote_name_with_space_is_encoded() {
        let api = HttpPlanetApi::new("http://localhost:5000").unwrap();
        assert_eq!(
            api.endpoint("vote/Planet X").unwrap().as_str(),
            "http://localhost:5000/vote/Planet%20X"
        );
    }

    #[tokio::test]
    async fn test_submit_vote_posts_to_named_path() {
        let server = MockServer::start();
        let vote_mock = server.mock(|when, then| {
            when.method(POST).path("/vote/Mars");
            then.status(200)
                .json_body(serde_json::json!({"message": "Voted for Mars"}));
        });

        let api = HttpPlanetApi::new(&server.base_url()).unwrap();
        let receipt = api.submit_vote("Mars").await.unwrap();

        vote_mock.assert();
        assert_eq!(receipt.message, "Voted for Mars");
    }

    #[tokio::test]
    async fn test_comment_sends_json_body() {
        let server = MockServer::start();
        let comment_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/comment")
                .json_body(serde_json::json!({"planet_name": "Mars", "comment": "Dusty"}));
            then.status(200)
                .json_body(serde_json::json!({"message": "Comment stored successfully"}));
        });

        let api = HttpPlanetApi::new(&server.base_url()).unwrap();
        let receipt = api
            .submit_comment(&CommentRequest {
                planet_name: "Mars".to_string(),
                comment: "Dusty".to_string(),
            })
            .await
            .unwrap();

        comment_mock.assert();
        assert_eq!(receipt.message, "Comment stored successfully");
    }

    #[tokio::test]
    async fn test_register_created_and_duplicate() {
        let server = MockServer::start();
        let created_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/register")
                .json_body(serde_json::json!({"username": "ada", "password": "s3cret"}));
            then.status(201)
                .json_body(serde_json::json!({"message": "User registered successfully"}));
        });
        let duplicate_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/register")
                .json_body(serde_json::json!({"username": "taken", "password": "pw"}));
            then.status(400)
                .json_body(serde_json::json!({"error": "Username already exists"}));
        });

        let api = HttpPlanetApi::new(&server.base_url()).unwrap();
        let receipt = api
            .register(&RegisterRequest {
                username: "ada".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();
        let err = api
            .register(&RegisterRequest {
                username: "taken".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();

        created_mock.assert();
        duplicate_mock.assert();
        assert_eq!(receipt.message, "User registered successfully");
        match err {
            PlanetError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Username already exists");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
