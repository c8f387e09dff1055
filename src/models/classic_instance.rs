use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Reference to another Azure resource
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubResource {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
}

/// Classic VM as returned by `Microsoft.ClassicCompute/virtualMachines`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicInstanceRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: ClassicVirtualMachineProperties,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicVirtualMachineProperties {
    /// Cloud service the VM is deployed into
    pub domain_name: Option<SubResource>,
    /// Only present when fetched with `$expand=instanceView`
    pub instance_view: Option<ClassicInstanceView>,
    #[serde(deserialize_with = "null_as_default")]
    pub network_profile: ClassicNetworkProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub hardware_profile: ClassicHardwareProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_profile: ClassicStorageProfile,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicInstanceView {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub power_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_ip_addresses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fully_qualified_domain_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub update_domain: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub fault_domain: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub status_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub private_ip_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instance_ip_addresses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub computer_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub guest_agent_status: GuestAgentStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestAgentStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub protocol_version: String,
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub guest_agent_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub formatted_message: FormattedMessage,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormattedMessage {
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicHardwareProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub platform_guest_agent: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_locked: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicStorageProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub operating_system_disk: ClassicDisk,
    #[serde(deserialize_with = "null_as_default")]
    pub data_disks: Vec<ClassicDisk>,
}

/// Disk entry embedded in the storage profile
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicDisk {
    #[serde(deserialize_with = "null_as_default")]
    pub lun: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub disk_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub caching: String,
    #[serde(deserialize_with = "null_as_default")]
    pub operating_system: String,
    #[serde(deserialize_with = "null_as_default")]
    pub io_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_image_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vhd_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub disk_size: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_account: SubResource,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicNetworkProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub input_endpoints: Vec<InputEndpoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub instance_ips: Vec<InstanceIp>,
    #[serde(deserialize_with = "null_as_default")]
    pub reserved_ips: Vec<SubResource>,
    #[serde(deserialize_with = "null_as_default")]
    pub virtual_network: ClassicVirtualNetwork,
    pub network_security_group: Option<SubResource>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputEndpoint {
    #[serde(deserialize_with = "null_as_default")]
    pub endpoint_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub private_port: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub public_port: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_direct_server_return: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceIp {
    #[serde(deserialize_with = "null_as_default")]
    pub idle_timeout_in_minutes: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicVirtualNetwork {
    #[serde(deserialize_with = "null_as_default")]
    pub static_ip_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subnet_names: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
}
