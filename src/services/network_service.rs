use crate::cloudprovider::CloudNic;
use crate::models::ClassicInstanceRecord;
use crate::utils::mac_from_ip;

/// Subnet reference and address of an instance's single NIC
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkIdentity {
    pub id: String,
    pub ip: String,
}

/// Resolve the network identity of `instance_id` from `record`.
///
/// The virtual-network block (first subnet, static IP) wins; the instance
/// view's private IP only fills whatever is still missing, and a synthetic
/// `"<instanceId>/<privateIp>"` stands in for a missing subnet reference.
/// Both halves must be known, otherwise the instance has no identity yet.
pub fn resolve_network_identity(
    instance_id: &str,
    record: &ClassicInstanceRecord,
) -> Option<NetworkIdentity> {
    let vnet = &record.properties.network_profile.virtual_network;
    let mut id = String::new();
    let mut ip = String::new();

    if let Some(subnet) = vnet.subnet_names.first() {
        id = format!("{}/{}", vnet.id, subnet);
    }
    if !vnet.static_ip_address.is_empty() {
        ip = vnet.static_ip_address.clone();
    }

    if id.is_empty() || ip.is_empty() {
        if let Some(view) = record
            .properties
            .instance_view
            .as_ref()
            .filter(|v| !v.private_ip_address.is_empty())
        {
            if id.is_empty() {
                id = format!("{}/{}", instance_id, view.private_ip_address);
            }
            if ip.is_empty() {
                ip = view.private_ip_address.clone();
            }
        }
    }

    if id.is_empty() || ip.is_empty() {
        return None;
    }
    Some(NetworkIdentity { id, ip })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassicInstanceNic {
    pub id: String,
    pub ip: String,
    pub instance_id: String,
}

impl ClassicInstanceNic {
    pub fn new(instance_id: &str, identity: NetworkIdentity) -> Self {
        Self {
            id: identity.id,
            ip: identity.ip,
            instance_id: instance_id.to_string(),
        }
    }
}

impl CloudNic for ClassicInstanceNic {
    fn id(&self) -> &str {
        &self.id
    }

    fn ip(&self) -> &str {
        &self.ip
    }

    fn mac(&self) -> String {
        mac_from_ip(&self.ip)
    }

    fn driver(&self) -> &str {
        "virtio"
    }

    fn network_id(&self) -> &str {
        &self.id
    }

    fn instance_id(&self) -> &str {
        &self.instance_id
    }
}
