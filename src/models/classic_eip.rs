use serde::{Deserialize, Serialize};

use super::{null_as_default, SubResource};

/// Reserved IP (`Microsoft.ClassicNetwork/reservedIps`)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicEipRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: ClassicEipProperties,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicEipProperties {
    #[serde(deserialize_with = "null_as_default")]
    pub ip_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provisioning_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub in_use: bool,
    /// Instance currently holding the reservation
    pub attached_to: Option<SubResource>,
}
