use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::server::model::pterodactyl::{
    CreateRemoteUserParam, RejectedRecord, RemoteServer, RemoteUser, ResourceUsage,
    ServerLimits, ServerResources,
};

#[derive(Debug, Deserialize)]
pub(super) struct ListEnvelope {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListMeta {
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub(super) struct Pagination {
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct ItemEnvelope<T> {
    pub attributes: T,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserAttributes {
    id: i64,
    email: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    root_admin: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct LimitsAttributes {
    cpu: i64,
    memory: i64,
    disk: i64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ServerAttributes {
    id: i64,
    user: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    identifier: String,
    #[serde(default)]
    status: Option<String>,
    node: i64,
    limits: LimitsAttributes,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResourceAttributes {
    current_state: String,
    #[serde(default)]
    is_suspended: bool,
    resources: UsageAttributes,
}

#[derive(Debug, Deserialize)]
struct UsageAttributes {
    #[serde(default)]
    cpu_absolute: f64,
    #[serde(default)]
    memory_bytes: u64,
    #[serde(default)]
    disk_bytes: u64,
    #[serde(default)]
    network_rx_bytes: u64,
    #[serde(default)]
    network_tx_bytes: u64,
    #[serde(default)]
    uptime: u64,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateUserBody {
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    password: String,
    root_admin: bool,
}

impl From<CreateRemoteUserParam> for CreateUserBody {
    fn from(param: CreateRemoteUserParam) -> Self {
        Self {
            email: param.email,
            username: param.username,
            first_name: param.first_name,
            last_name: param.last_name,
            password: param.password,
            root_admin: param.root_admin,
        }
    }
}

/// A panel record that can be validated out of its `attributes` object.
pub(super) trait PanelRecord: Sized {
    type Attributes: DeserializeOwned;

    const ENTITY: &'static str;

    fn validate(attributes: Self::Attributes) -> Result<Self, String>;

    /// Decodes one list item, keeping whatever id is readable when it is rejected.
    fn decode_item(raw: Value) -> Result<Self, RejectedRecord> {
        let remote_id = raw.pointer("/attributes/id").and_then(Value::as_i64);

        serde_json::from_value::<ItemEnvelope<Self::Attributes>>(raw.clone())
            .map_err(|e| e.to_string())
            .and_then(|envelope| Self::validate(envelope.attributes))
            .map_err(|reason| RejectedRecord {
                remote_id,
                reason,
                raw,
            })
    }
}

impl PanelRecord for RemoteUser {
    type Attributes = UserAttributes;

    const ENTITY: &'static str = "user";

    fn validate(attributes: UserAttributes) -> Result<Self, String> {
        let email = attributes.email.trim().to_lowercase();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(format!("user {} has an invalid email", attributes.id)),
        }

        Ok(Self {
            remote_id: attributes.id,
            email,
            first_name: attributes.first_name,
            last_name: attributes.last_name,
            is_root_admin: attributes.root_admin,
        })
    }
}

impl PanelRecord for RemoteServer {
    type Attributes = ServerAttributes;

    const ENTITY: &'static str = "server";

    fn validate(attributes: ServerAttributes) -> Result<Self, String> {
        if attributes.identifier.trim().is_empty() {
            return Err(format!("server {} has an empty identifier", attributes.id));
        }

        Ok(Self {
            remote_id: attributes.id,
            owner_remote_id: attributes.user,
            name: attributes.name,
            description: attributes.description.unwrap_or_default(),
            identifier: attributes.identifier,
            status: attributes.status,
            node: attributes.node,
            limits: ServerLimits {
                cpu: attributes.limits.cpu,
                memory: attributes.limits.memory,
                disk: attributes.limits.disk,
            },
        })
    }
}

impl From<ResourceAttributes> for ServerResources {
    fn from(attributes: ResourceAttributes) -> Self {
        let usage = attributes.resources;
        Self {
            available: true,
            current_state: attributes.current_state,
            is_suspended: attributes.is_suspended,
            usage: ResourceUsage {
                cpu_absolute: usage.cpu_absolute,
                memory_bytes: usage.memory_bytes,
                disk_bytes: usage.disk_bytes,
                network_rx_bytes: usage.network_rx_bytes,
                network_tx_bytes: usage.network_tx_bytes,
                uptime: usage.uptime,
            },
        }
    }
}
