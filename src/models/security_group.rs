use serde::{Deserialize, Serialize};

use super::{null_as_default, SubResource};

/// Classic network security group (`Microsoft.ClassicNetwork/networkSecurityGroups`)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicSecurityGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
}

/// Body PUT to `{instanceId}/associatedNetworkSecurityGroups/{name}`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupAssociation {
    pub id: String,
    pub name: String,
    pub properties: AssociationProperties,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationProperties {
    pub network_security_group: SubResource,
}
