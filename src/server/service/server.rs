use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::AppError,
    model::{resource::ServerUsage, server::Server},
    service::resource::ResourcePoller,
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every mirrored server ordered by name
    pub async fn get_all(&self) -> Result<Vec<Server>, AppError> {
        Ok(ServerRepository::new(self.db).get_all().await?)
    }

    /// Gets live usage for every mirrored server
    ///
    /// Unreachable servers are included with a zeroed reading.
    pub async fn get_usage(&self, poller: &ResourcePoller<'_>) -> Result<Vec<ServerUsage>, AppError> {
        let servers = self.get_all().await?;

        Ok(poller.poll(servers).await)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use test_utils::{
        builder::TestBuilder,
        factory::{server::ServerFactory, user_profile::ProfileFactory},
        pterodactyl,
    };
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::server::{config::PanelConfig, panel::PterodactylClient};

    /// Tests batch usage for stored servers.
    ///
    /// Expected: one reading per server in name order, the unreachable one zeroed
    #[tokio::test]
    async fn usage_covers_every_stored_server() {
        let test = TestBuilder::new().with_sync_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let owner = ProfileFactory::new(db).pterodactyl_id(7).build().await.unwrap();
        ServerFactory::new(db, owner.id)
            .name("beta")
            .identifier("bbbb2222")
            .build()
            .await
            .unwrap();
        ServerFactory::new(db, owner.id)
            .name("alpha")
            .identifier("aaaa1111")
            .build()
            .await
            .unwrap();

        let panel = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/client/servers/aaaa1111/resources"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(pterodactyl::resources("running", 25.0, 0, 0)),
            )
            .mount(&panel)
            .await;
        let client = PterodactylClient::new(&PanelConfig {
            url: panel.uri(),
            api_key: "ptla_test".to_string(),
            client_api_key: "ptla_test".to_string(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap();
        let poller = ResourcePoller::new(&client, 4, Duration::from_secs(5));

        let usage = ServerService::new(db).get_usage(&poller).await.unwrap();

        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].server.name, "alpha");
        assert!(usage[0].resources.available);
        assert_eq!(usage[0].resources.usage.cpu_absolute, 25.0);
        assert_eq!(usage[1].server.name, "beta");
        assert!(!usage[1].resources.available);
    }
}
