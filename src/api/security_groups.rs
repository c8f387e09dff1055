use super::{decode, ClassicApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{AssociationProperties, ClassicSecurityGroup, SecurityGroupAssociation, SubResource};

pub async fn get_classic_security_group<A: ClassicApi + ?Sized>(
    api: &A,
    secgroup_id: &str,
) -> ApiResult<ClassicSecurityGroup> {
    let value = api.get(secgroup_id, &[]).await?;
    decode(value)
}

/// Id of the association resource linking `secgroup_name` to an instance.
pub fn association_id(instance_id: &str, secgroup_name: &str) -> String {
    format!("{}/associatedNetworkSecurityGroups/{}", instance_id, secgroup_name)
}

/// Attach `secgroup` to the instance.
pub async fn associate_security_group<A: ClassicApi + ?Sized>(
    api: &A,
    instance_id: &str,
    secgroup: &ClassicSecurityGroup,
) -> ApiResult<()> {
    let body = SecurityGroupAssociation {
        id: association_id(instance_id, &secgroup.name),
        name: secgroup.name.clone(),
        properties: AssociationProperties {
            network_security_group: SubResource {
                id: secgroup.id.clone(),
                name: secgroup.name.clone(),
                resource_type: String::new(),
            },
        },
        resource_type: String::new(),
    };
    let body = serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    api.update(body).await
}
