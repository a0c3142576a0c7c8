use crate::{
    model::server::ServerUsageDto,
    server::model::{pterodactyl::ServerResources, server::Server},
};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Live usage of a mirrored server merged with its stored limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerUsage {
    pub server: Server,
    pub resources: ServerResources,
}

impl ServerUsage {
    /// CPU usage as a percentage of the CPU limit.
    pub fn cpu_percent_of_limit(&self) -> Option<f64> {
        percent_of(self.resources.usage.cpu_absolute, self.server.limits.cpu as f64)
    }

    /// Memory usage as a percentage of the memory limit (MiB).
    pub fn memory_percent_of_limit(&self) -> Option<f64> {
        percent_of(
            self.resources.usage.memory_bytes as f64,
            self.server.limits.memory as f64 * BYTES_PER_MIB,
        )
    }

    /// Disk usage as a percentage of the disk limit (MiB).
    pub fn disk_percent_of_limit(&self) -> Option<f64> {
        percent_of(
            self.resources.usage.disk_bytes as f64,
            self.server.limits.disk as f64 * BYTES_PER_MIB,
        )
    }

    pub fn into_dto(self) -> ServerUsageDto {
        let cpu_percent_of_limit = self.cpu_percent_of_limit();
        let memory_percent_of_limit = self.memory_percent_of_limit();
        let disk_percent_of_limit = self.disk_percent_of_limit();

        ServerUsageDto {
            server_id: self.server.id,
            identifier: self.server.identifier,
            name: self.server.name,
            available: self.resources.available,
            usage: self.resources.usage.into_dto(),
            cpu_percent_of_limit,
            memory_percent_of_limit,
            disk_percent_of_limit,
        }
    }
}

// Zero limit means unlimited on the panel.
fn percent_of(used: f64, limit: f64) -> Option<f64> {
    if limit <= 0.0 {
        return None;
    }
    Some(used / limit * 100.0)
}
