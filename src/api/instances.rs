use serde_json::json;

use super::{decode, ClassicApi};
use crate::error::ApiResult;
use crate::models::classic_disk::DiskList;
use crate::models::{ClassicDiskRecord, ClassicInstanceRecord};

pub const CLASSIC_VM_RESOURCE_TYPE: &str = "Microsoft.ClassicCompute/virtualMachines";

/// Azure reports locations either as display names ("East US") or as
/// region names ("eastus").
fn same_location(a: &str, b: &str) -> bool {
    let norm = |s: &str| s.to_lowercase().replace(' ', "");
    norm(a) == norm(b)
}

/// List classic VMs, optionally keeping only those in `location`.
pub async fn get_classic_instances<A: ClassicApi + ?Sized>(
    api: &A,
    location: Option<&str>,
) -> ApiResult<Vec<ClassicInstanceRecord>> {
    let values = api.list(CLASSIC_VM_RESOURCE_TYPE, &[]).await?;
    let mut instances = Vec::with_capacity(values.len());
    for value in values {
        let instance: ClassicInstanceRecord = decode(value)?;
        if let Some(loc) = location.filter(|l| !l.is_empty()) {
            if !same_location(&instance.location, loc) {
                continue;
            }
        }
        instances.push(instance);
    }
    tracing::debug!("Found {} classic instances", instances.len());
    Ok(instances)
}

/// Fetch one classic VM including its instance view.
pub async fn get_classic_instance<A: ClassicApi + ?Sized>(
    api: &A,
    instance_id: &str,
) -> ApiResult<ClassicInstanceRecord> {
    let params = vec![("$expand".to_string(), "instanceView".to_string())];
    let value = api.get(instance_id, &params).await?;
    decode(value)
}

pub async fn get_classic_instance_disks<A: ClassicApi + ?Sized>(
    api: &A,
    instance_id: &str,
) -> ApiResult<Vec<ClassicDiskRecord>> {
    let resource = format!("{}/disks", instance_id);
    let value = api.get(&resource, &[]).await?;
    let list: DiskList = decode(value)?;
    Ok(list.value)
}

pub async fn start_vm<A: ClassicApi + ?Sized>(api: &A, instance_id: &str) -> ApiResult<()> {
    api.perform(instance_id, "start", None).await?;
    Ok(())
}

/// Classic VMs only know one shutdown verb; `is_force` is accepted for
/// interface parity.
pub async fn stop_classic_vm<A: ClassicApi + ?Sized>(
    api: &A,
    instance_id: &str,
    is_force: bool,
) -> ApiResult<()> {
    tracing::debug!("shutdown {} (force={})", instance_id, is_force);
    api.perform(instance_id, "shutdown", None).await?;
    Ok(())
}

pub async fn delete_vm<A: ClassicApi + ?Sized>(api: &A, instance_id: &str) -> ApiResult<()> {
    api.delete(instance_id).await
}

pub async fn attach_disk<A: ClassicApi + ?Sized>(
    api: &A,
    instance_id: &str,
    disk_id: &str,
) -> ApiResult<()> {
    api.perform(instance_id, "attachDisk", Some(json!({ "id": disk_id })))
        .await?;
    Ok(())
}

pub async fn detach_disk<A: ClassicApi + ?Sized>(
    api: &A,
    instance_id: &str,
    disk_id: &str,
) -> ApiResult<()> {
    api.perform(instance_id, "detachDisk", Some(json!({ "id": disk_id })))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_location() {
        assert!(same_location("East US", "eastus"));
        assert!(same_location("westeurope", "West Europe"));
        assert!(!same_location("East US 2", "eastus"));
    }
}
