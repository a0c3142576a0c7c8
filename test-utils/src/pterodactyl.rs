//! Pterodactyl API response bodies for mock panel servers.
//!
//! Shapes follow the panel's application and client APIs: single records are
//! wrapped as `{ "object", "attributes" }` and lists as `{ "object": "list", "data",
//! "meta": { "pagination" } }`.

use serde_json::{json, Value};

/// A user record as returned by `/api/application/users/{id}`.
pub fn user(id: i64, email: &str) -> Value {
    let username = email.split('@').next().unwrap_or(email);
    json!({
        "object": "user",
        "attributes": {
            "id": id,
            "external_id": null,
            "uuid": format!("00000000-0000-0000-0000-{:012}", id),
            "username": username,
            "email": email,
            "first_name": "First",
            "last_name": "Last",
            "language": "en",
            "root_admin": false,
            "2fa": false,
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00"
        }
    })
}

/// A server record as returned by `/api/application/servers/{id}`.
///
/// `limits` is `(cpu, memory, disk)` with memory and disk in MiB. The identifier is
/// the id rendered as eight hex digits.
pub fn server(id: i64, owner: i64, limits: (i64, i64, i64)) -> Value {
    let (cpu, memory, disk) = limits;
    json!({
        "object": "server",
        "attributes": {
            "id": id,
            "external_id": null,
            "uuid": format!("00000000-0000-0000-0000-{:012}", id),
            "identifier": format!("{:08x}", id),
            "name": format!("server-{}", id),
            "description": "",
            "status": null,
            "suspended": false,
            "limits": {
                "memory": memory,
                "swap": 0,
                "disk": disk,
                "io": 500,
                "cpu": cpu,
                "threads": null
            },
            "user": owner,
            "node": 1,
            "allocation": 1,
            "nest": 1,
            "egg": 1
        }
    })
}

/// A list page wrapping already-built records.
pub fn list(items: Vec<Value>, current_page: u32, total_pages: u32) -> Value {
    let count = items.len();
    json!({
        "object": "list",
        "data": items,
        "meta": {
            "pagination": {
                "total": count,
                "count": count,
                "per_page": 100,
                "current_page": current_page,
                "total_pages": total_pages,
                "links": {}
            }
        }
    })
}

/// A resource usage body as returned by `/api/client/servers/{identifier}/resources`.
pub fn resources(state: &str, cpu_absolute: f64, memory_bytes: u64, disk_bytes: u64) -> Value {
    json!({
        "object": "stats",
        "attributes": {
            "current_state": state,
            "is_suspended": false,
            "resources": {
                "memory_bytes": memory_bytes,
                "cpu_absolute": cpu_absolute,
                "disk_bytes": disk_bytes,
                "network_rx_bytes": 0,
                "network_tx_bytes": 0,
                "uptime": 0
            }
        }
    })
}
