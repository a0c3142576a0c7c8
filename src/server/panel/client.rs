use async_trait::async_trait;
use reqwest::{header, redirect::Policy, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::{
    config::PanelConfig,
    error::{config::ConfigError, panel::PanelError, AppError},
    model::pterodactyl::{
        CreateRemoteUserParam, RemoteCollection, RemoteServer, RemoteUser, ServerResources,
    },
    panel::{
        validate_identifier,
        wire::{CreateUserBody, ItemEnvelope, ListEnvelope, PanelRecord, ResourceAttributes},
        PanelApi,
    },
};

/// Page size requested from list endpoints; the panel caps it at 100.
const PER_PAGE: u32 = 100;

/// HTTP client for the panel's application and client APIs.
///
/// Users, servers and account creation go through `/api/application` with the
/// application key; live resource usage goes through `/api/client` with the client
/// key. The underlying client follows no redirects so the bearer keys are never
/// sent to another host.
pub struct PterodactylClient {
    http: Client,
    application_url: String,
    client_url: String,
    api_key: String,
    client_api_key: String,
}

impl std::fmt::Debug for PterodactylClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PterodactylClient")
            .field("application_url", &self.application_url)
            .field("client_url", &self.client_url)
            .finish()
    }
}

impl PterodactylClient {
    /// Creates a client from panel configuration.
    ///
    /// # Returns
    /// - `Ok(PterodactylClient)` - Client ready for use
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - Panel URL or API key is empty
    /// - `Err(AppError::ReqwestErr)` - The HTTP client could not be built
    pub fn new(config: &PanelConfig) -> Result<Self, AppError> {
        let url = config.url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::MissingEnvVar("PTERODACTYL_PANEL_URL".to_string()).into());
        }
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("PTERODACTYL_API_KEY".to_string()).into());
        }

        let http = Client::builder()
            .redirect(Policy::none())
            .timeout(config.request_timeout)
            .build()?;

        let client_api_key = if config.client_api_key.trim().is_empty() {
            config.api_key.clone()
        } else {
            config.client_api_key.clone()
        };

        Ok(Self {
            http,
            application_url: format!("{}/api/application", url),
            client_url: format!("{}/api/client", url),
            api_key: config.api_key.clone(),
            client_api_key,
        })
    }

    fn application(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json")
    }

    /// Sends a request, turning non-2xx responses into `PanelError::Status`.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, PanelError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        tracing::debug!("Panel responded with HTTP {}", status.as_u16());

        Err(PanelError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetches a single record and validates its attributes.
    async fn get_item<T: PanelRecord>(&self, url: String) -> Result<T, PanelError> {
        let response = self.send(self.application(self.http.get(url))).await?;
        decode_single(response).await
    }

    /// Walks every page of a list endpoint.
    ///
    /// Items that fail validation are collected as rejected records; a page that
    /// cannot be fetched or decoded fails the whole listing.
    async fn list<T: PanelRecord>(&self, path: &str) -> Result<RemoteCollection<T>, PanelError> {
        let url = format!("{}/{}", self.application_url, path);
        let mut collection = RemoteCollection::default();
        let mut page: u32 = 1;

        loop {
            let request = self
                .http
                .get(&url)
                .query(&[("page", page), ("per_page", PER_PAGE)]);
            let envelope: ListEnvelope = self.send(self.application(request)).await?.json().await?;

            for raw in envelope.data {
                match T::decode_item(raw) {
                    Ok(item) => collection.items.push(item),
                    Err(rejected) => {
                        tracing::warn!(
                            "Rejected panel {} {:?}: {}",
                            T::ENTITY,
                            rejected.remote_id,
                            rejected.reason
                        );
                        collection.rejected.push(rejected);
                    }
                }
            }

            let total_pages = envelope.meta.map(|meta| meta.pagination.total_pages);
            match total_pages {
                Some(total) if page < total => page += 1,
                _ => break,
            }
        }

        tracing::debug!(
            "Fetched {} panel {}s ({} rejected) over {} page(s)",
            collection.items.len(),
            T::ENTITY,
            collection.rejected.len(),
            page
        );

        Ok(collection)
    }
}

async fn decode_single<T: PanelRecord>(response: Response) -> Result<T, PanelError> {
    let envelope: ItemEnvelope<T::Attributes> = decode_json(response).await?;
    T::validate(envelope.attributes).map_err(|reason| PanelError::Malformed {
        entity: T::ENTITY,
        reason,
    })
}

async fn decode_json<D: DeserializeOwned>(response: Response) -> Result<D, PanelError> {
    Ok(response.json::<D>().await?)
}

#[async_trait]
impl PanelApi for PterodactylClient {
    async fn list_users(&self) -> Result<RemoteCollection<RemoteUser>, PanelError> {
        self.list("users").await
    }

    async fn list_servers(&self) -> Result<RemoteCollection<RemoteServer>, PanelError> {
        self.list("servers").await
    }

    async fn create_user(&self, param: CreateRemoteUserParam) -> Result<RemoteUser, PanelError> {
        let url = format!("{}/users", self.application_url);
        let request = self
            .application(self.http.post(url))
            .json(&CreateUserBody::from(param));

        let response = self.send(request).await?;
        decode_single(response).await
    }

    async fn get_user(&self, remote_id: i64) -> Result<RemoteUser, PanelError> {
        self.get_item(format!("{}/users/{}", self.application_url, remote_id))
            .await
    }

    async fn get_server(&self, remote_id: i64) -> Result<RemoteServer, PanelError> {
        self.get_item(format!("{}/servers/{}", self.application_url, remote_id))
            .await
    }

    async fn get_server_resources(&self, identifier: &str) -> Result<ServerResources, PanelError> {
        validate_identifier(identifier)?;

        let url = format!("{}/servers/{}/resources", self.client_url, identifier);
        let request = self
            .http
            .get(url)
            .bearer_auth(&self.client_api_key)
            .header(header::ACCEPT, "application/json");

        let response = self.send(request).await?;
        let envelope: ItemEnvelope<ResourceAttributes> = decode_json(response).await?;

        Ok(envelope.attributes.into())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use test_utils::pterodactyl;
    use wiremock::{
        matchers::{body_partial_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn client_for(server: &MockServer) -> PterodactylClient {
        PterodactylClient::new(&PanelConfig {
            url: server.uri(),
            api_key: "ptla_test".to_string(),
            client_api_key: "ptlc_test".to_string(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    /// Tests that construction refuses missing credentials.
    ///
    /// Expected: Err(ConfigErr(MissingEnvVar)) for empty URL and empty key
    #[test]
    fn refuses_missing_credentials() {
        let empty_url = PanelConfig {
            url: String::new(),
            api_key: "ptla_test".to_string(),
            client_api_key: String::new(),
            request_timeout: Duration::from_secs(5),
        };
        let empty_key = PanelConfig {
            url: "https://panel.example.com".to_string(),
            api_key: String::new(),
            ..empty_url.clone()
        };

        assert!(matches!(
            PterodactylClient::new(&empty_url),
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
        assert!(matches!(
            PterodactylClient::new(&empty_key),
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    /// Tests that list endpoints are followed across pages.
    ///
    /// Expected: users from both pages returned in panel order with bearer auth
    #[tokio::test]
    async fn lists_users_across_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/application/users"))
            .and(query_param("page", "1"))
            .and(header("authorization", "Bearer ptla_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(pterodactyl::list(
                vec![pterodactyl::user(1, "one@example.com")],
                1,
                2,
            )))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/application/users"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(pterodactyl::list(
                vec![pterodactyl::user(2, "Two@Example.com")],
                2,
                2,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).list_users().await.unwrap();

        let ids: Vec<i64> = users.items.iter().map(|u| u.remote_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(users.items[1].email, "two@example.com");
        assert!(users.rejected.is_empty());
    }

    /// Tests that malformed list items are rejected without failing the listing.
    ///
    /// Expected: one valid server, one rejected record carrying the readable id
    #[tokio::test]
    async fn rejects_malformed_servers() {
        let server = MockServer::start().await;
        let mut broken = pterodactyl::server(2, 7, (100, 1024, 5000));
        broken["attributes"]
            .as_object_mut()
            .unwrap()
            .remove("limits");
        Mock::given(method("GET"))
            .and(path("/api/application/servers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(pterodactyl::list(
                vec![pterodactyl::server(1, 7, (100, 1024, 5000)), broken],
                1,
                1,
            )))
            .mount(&server)
            .await;

        let servers = client_for(&server).list_servers().await.unwrap();

        assert_eq!(servers.items.len(), 1);
        assert_eq!(servers.items[0].limits.memory, 1024);
        assert_eq!(servers.rejected.len(), 1);
        assert_eq!(servers.rejected[0].remote_id, Some(2));
    }

    /// Tests that non-2xx responses carry the panel's body.
    ///
    /// Expected: Err(PanelError::Status) with status 422 and the JSON payload
    #[tokio::test]
    async fn status_error_keeps_body() {
        let server = MockServer::start().await;
        let body = json!({"errors": [{"code": "ValidationException", "detail": "email taken"}]});
        Mock::given(method("POST"))
            .and(path("/api/application/users"))
            .respond_with(ResponseTemplate::new(422).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .create_user(CreateRemoteUserParam {
                email: "b@x.com".to_string(),
                username: "b".to_string(),
                first_name: "b".to_string(),
                last_name: String::new(),
                password: "hunter22".to_string(),
                root_admin: false,
            })
            .await;

        match result {
            Err(PanelError::Status { status, body: got }) => {
                assert_eq!(status, 422);
                assert_eq!(got, body);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    /// Tests account creation payload and decoding.
    ///
    /// Expected: POST body carries username and root_admin false; id decoded
    #[tokio::test]
    async fn creates_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/application/users"))
            .and(body_partial_json(json!({
                "email": "b@x.com",
                "username": "b",
                "root_admin": false
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(pterodactyl::user(42, "b@x.com")))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server)
            .create_user(CreateRemoteUserParam {
                email: "b@x.com".to_string(),
                username: "b".to_string(),
                first_name: "b".to_string(),
                last_name: String::new(),
                password: "hunter22".to_string(),
                root_admin: false,
            })
            .await
            .unwrap();

        assert_eq!(user.remote_id, 42);
    }

    /// Tests resource reads use the client API and client key.
    ///
    /// Expected: usage decoded and marked available
    #[tokio::test]
    async fn reads_resources_with_client_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/client/servers/1a2b3c4d/resources"))
            .and(header("authorization", "Bearer ptlc_test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(pterodactyl::resources("running", 12.5, 1024, 2048)),
            )
            .mount(&server)
            .await;

        let resources = client_for(&server)
            .get_server_resources("1a2b3c4d")
            .await
            .unwrap();

        assert!(resources.available);
        assert_eq!(resources.current_state, "running");
        assert_eq!(resources.usage.cpu_absolute, 12.5);
        assert_eq!(resources.usage.disk_bytes, 2048);
    }

    /// Tests that identifiers with path characters are refused locally.
    ///
    /// Expected: Err(InvalidRequest) without any request sent
    #[tokio::test]
    async fn refuses_path_like_identifier() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .get_server_resources("../application/users")
            .await;

        assert!(matches!(result, Err(PanelError::InvalidRequest(_))));
    }

    /// Tests that a 404 single read is reported as not found.
    ///
    /// Expected: Err(Status { status: 404 }) and `is_not_found()`
    #[tokio::test]
    async fn missing_server_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/application/servers/5"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_server(5).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.details(), Value::String("gone".to_string()));
    }
}
