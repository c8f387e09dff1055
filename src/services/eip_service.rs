use crate::api::{get_classic_eip, ClassicApi};
use crate::cloudprovider::{CloudEip, EipMode};
use crate::models::{ClassicEipRecord, ClassicInstanceRecord};
use crate::utils::global_id_of;

/// Public address of a classic instance, either a reserved IP or the
/// instance's own public address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassicEipAddress {
    pub id: String,
    pub name: String,
    pub ip_address: String,
    pub status: String,
    pub instance_id: String,
}

impl ClassicEipAddress {
    pub fn from_reserved(record: ClassicEipRecord, instance_id: &str) -> Self {
        Self {
            status: reserved_ip_status(&record.properties.status).to_string(),
            id: record.id,
            name: record.name,
            ip_address: record.properties.ip_address,
            instance_id: instance_id.to_string(),
        }
    }

    /// Lightweight record for an address only known from the instance view.
    pub fn from_public_ip(instance_id: &str, ip: &str) -> Self {
        Self {
            id: instance_id.to_string(),
            name: ip.to_string(),
            ip_address: ip.to_string(),
            status: "ready".to_string(),
            instance_id: instance_id.to_string(),
        }
    }
}

/// Map a reserved IP provisioning status onto an address status.
fn reserved_ip_status(raw: &str) -> &'static str {
    match raw {
        "Created" | "" => "ready",
        "Creating" | "Updating" => "allocating",
        "Deleting" => "deallocating",
        _ => "unknown",
    }
}

impl CloudEip for ClassicEipAddress {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn global_id(&self) -> String {
        global_id_of(&self.id)
    }

    fn ip_addr(&self) -> &str {
        &self.ip_address
    }

    fn mode(&self) -> EipMode {
        if self.id == self.instance_id {
            EipMode::InstancePublicIp
        } else {
            EipMode::ElasticIp
        }
    }

    fn associated_instance_id(&self) -> Option<&str> {
        Some(self.instance_id.as_str()).filter(|s| !s.is_empty())
    }

    fn status(&self) -> &str {
        &self.status
    }
}

/// Find the external address of `record`.
///
/// Reserved IPs are tried in order. A lookup failure is logged and the next
/// candidate tried; a reservation now attached to another instance is
/// skipped. When no reserved IP resolves, the first public IP of the instance
/// view is used. `None` means the instance has no external address.
pub async fn resolve_external_address<A: ClassicApi + ?Sized>(
    api: &A,
    record: &ClassicInstanceRecord,
) -> Option<ClassicEipAddress> {
    for reserved in &record.properties.network_profile.reserved_ips {
        match get_classic_eip(api, &reserved.id).await {
            Ok(eip) => {
                if let Some(attached) = eip
                    .properties
                    .attached_to
                    .as_ref()
                    .filter(|a| !a.id.is_empty())
                {
                    if attached.id != record.id {
                        // usually the instance was deallocated and the
                        // reservation moved to another machine
                        tracing::warn!(
                            "reserved ip {} of classic instance {} is attached to {}",
                            reserved.name,
                            record.name,
                            attached.id
                        );
                        continue;
                    }
                }
                return Some(ClassicEipAddress::from_reserved(eip, &record.id));
            }
            Err(e) => {
                tracing::error!(
                    "failed find eip {} for classic instance {}: {}",
                    reserved.name,
                    record.name,
                    e
                );
            }
        }
    }

    record
        .properties
        .instance_view
        .as_ref()
        .and_then(|view| view.public_ip_addresses.first())
        .map(|ip| ClassicEipAddress::from_public_ip(&record.id, ip))
}
