use serde::{Deserialize, Serialize};

use super::{null_as_default, SubResource};

/// Disk as listed under `{instanceId}/disks`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicDiskRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: ClassicDiskProperties,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicDiskProperties {
    #[serde(deserialize_with = "null_as_default")]
    pub disk_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub caching: String,
    #[serde(deserialize_with = "null_as_default")]
    pub operating_system: String,
    #[serde(deserialize_with = "null_as_default")]
    pub io_type: String,
    #[serde(rename = "diskSizeGB", deserialize_with = "null_as_default")]
    pub disk_size_gb: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub disk_size: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub created_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_image_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vhd_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_account: SubResource,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DiskList {
    #[serde(deserialize_with = "null_as_default")]
    pub value: Vec<ClassicDiskRecord>,
}
