use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::{self, ClassicApi};
use crate::cloudprovider::{
    wait_status, BillingCycle, BiosType, ChangeConfigOptions, CloudInstance, DeployOptions,
    InstanceStatus, InstanceUpdateOptions, OsType, RebuildRootOptions, StatusSource, StopOptions,
    VncInfo, WaitConfig, BILLING_TYPE_POSTPAID, HYPERVISOR_AZURE, OS_ARCH_X86_64,
};
use crate::error::{ApiResultExt, CloudError, CloudResult};
use crate::models::{lookup_vm_size, ClassicDiskRecord, ClassicInstanceRecord};
use crate::services::eip_service::{resolve_external_address, ClassicEipAddress};
use crate::services::network_service::{resolve_network_identity, ClassicInstanceNic};
use crate::utils::{global_id_of, normalize_os_type, normalize_status, resource_group_of};

/// Where an instance lives in the region / zone hierarchy
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceContext {
    pub region_name: String,
    pub zone_global_id: String,
}

/// A classic VM bound to the transport it was fetched with.
///
/// `refresh` replaces the record in place, so one value belongs to one call
/// chain; concurrent callers should fetch their own.
pub struct ClassicInstance<A: ClassicApi> {
    api: Arc<A>,
    context: InstanceContext,
    wait: WaitConfig,
    record: ClassicInstanceRecord,
}

impl<A: ClassicApi> ClassicInstance<A> {
    pub fn new(api: Arc<A>, context: InstanceContext, record: ClassicInstanceRecord) -> Self {
        Self {
            api,
            context,
            wait: WaitConfig::default(),
            record,
        }
    }

    pub fn with_wait_config(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    /// Point-fetch one instance (with its instance view).
    pub async fn fetch(api: Arc<A>, context: InstanceContext, instance_id: &str) -> CloudResult<Self> {
        let record = api::get_classic_instance(&*api, instance_id)
            .await
            .context("GetClassicInstance")?;
        Ok(Self::new(api, context, record))
    }

    /// List the instances of the context's region (all regions when the
    /// region name is empty).
    pub async fn list(api: Arc<A>, context: InstanceContext) -> CloudResult<Vec<Self>> {
        let location = Some(context.region_name.as_str()).filter(|s| !s.is_empty());
        let records = api::get_classic_instances(&*api, location)
            .await
            .context("GetClassicInstances")?;
        Ok(records
            .into_iter()
            .map(|r| Self::new(api.clone(), context.clone(), r))
            .collect())
    }

    pub fn record(&self) -> &ClassicInstanceRecord {
        &self.record
    }

    pub fn wait_config(&self) -> WaitConfig {
        self.wait
    }

    /// Raw instance-view status, if the view has been fetched.
    pub fn raw_status(&self) -> Option<&str> {
        self.record
            .properties
            .instance_view
            .as_ref()
            .map(|v| v.status.as_str())
    }

    async fn wait_for(&mut self, expected: InstanceStatus) -> CloudResult<()> {
        let WaitConfig { interval, timeout } = self.wait;
        wait_status(self, expected, interval, timeout).await
    }

    /// Best-effort removal of a resource tied to the instance.
    async fn delete_quietly(&self, resource_id: &str) {
        if let Err(e) = self.api.delete(resource_id).await {
            tracing::warn!(
                "failed to delete {} of classic instance {}: {}",
                resource_id,
                self.record.name,
                e
            );
        }
    }
}

#[async_trait]
impl<A: ClassicApi> StatusSource for ClassicInstance<A> {
    fn name(&self) -> &str {
        &self.record.name
    }

    async fn refresh(&mut self) -> CloudResult<()> {
        let fresh = api::get_classic_instance(&*self.api, &self.record.id)
            .await
            .context("GetClassicInstance")?;
        self.record = fresh;
        Ok(())
    }

    fn cached_status(&self) -> InstanceStatus {
        match self.record.properties.instance_view.as_ref() {
            Some(view) => normalize_status(&self.record.name, &view.status),
            None => InstanceStatus::Unknown,
        }
    }

    async fn status(&mut self) -> InstanceStatus {
        if self.record.properties.instance_view.is_none() {
            if let Err(e) = self.refresh().await {
                tracing::error!("failed to get status for classic instance {}: {}", self.record.name, e);
                return InstanceStatus::Unknown;
            }
        }
        self.cached_status()
    }
}

#[async_trait]
impl<A: ClassicApi> CloudInstance for ClassicInstance<A> {
    type Nic = ClassicInstanceNic;
    type Disk = ClassicDiskRecord;
    type Eip = ClassicEipAddress;

    fn id(&self) -> &str {
        &self.record.id
    }

    fn hostname(&self) -> &str {
        &self.record.name
    }

    fn global_id(&self) -> String {
        global_id_of(&self.record.id)
    }

    fn project_id(&self) -> String {
        resource_group_of(&self.record.id)
    }

    fn tags(&self) -> HashMap<String, String> {
        self.record.tags.clone()
    }

    fn sys_tags(&self) -> HashMap<String, String> {
        let mut data = HashMap::new();
        data.insert(
            "price_key".to_string(),
            format!(
                "{}::{}",
                self.record.properties.hardware_profile.size, self.context.region_name
            ),
        );
        data.insert("zone_ext_id".to_string(), self.context.zone_global_id.clone());
        data
    }

    fn hypervisor(&self) -> &str {
        HYPERVISOR_AZURE
    }

    fn instance_type(&self) -> &str {
        &self.record.properties.hardware_profile.size
    }

    fn vcpu_count(&self) -> u32 {
        let size = &self.record.properties.hardware_profile.size;
        match lookup_vm_size(size) {
            Some(vm_size) => vm_size.number_of_cores,
            None => {
                tracing::error!("failed to find classic VMSize for {}", size);
                0
            }
        }
    }

    fn vmem_size_mb(&self) -> u32 {
        let size = &self.record.properties.hardware_profile.size;
        match lookup_vm_size(size) {
            Some(vm_size) => vm_size.memory_in_mb,
            None => {
                tracing::error!("failed to find classic VMSize for {}", size);
                0
            }
        }
    }

    fn machine(&self) -> &str {
        "pc"
    }

    fn boot_order(&self) -> &str {
        "dcn"
    }

    fn vga(&self) -> &str {
        "std"
    }

    fn vdi(&self) -> &str {
        "vnc"
    }

    fn bios(&self) -> BiosType {
        BiosType::Bios
    }

    fn os_type(&self) -> OsType {
        normalize_os_type(&self.record.properties.storage_profile.operating_system_disk.operating_system)
    }

    fn full_os_name(&self) -> &str {
        &self.record.properties.storage_profile.operating_system_disk.source_image_name
    }

    fn os_arch(&self) -> &str {
        OS_ARCH_X86_64
    }

    fn os_version(&self) -> &str {
        ""
    }

    fn os_dist(&self) -> &str {
        ""
    }

    fn os_lang(&self) -> &str {
        ""
    }

    fn security_group_ids(&self) -> Vec<String> {
        self.record
            .properties
            .network_profile
            .network_security_group
            .iter()
            .map(|nsg| nsg.id.clone())
            .collect()
    }

    fn billing_type(&self) -> &str {
        BILLING_TYPE_POSTPAID
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn expired_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn error(&self) -> Option<String> {
        None
    }

    async fn disks(&self) -> CloudResult<Vec<ClassicDiskRecord>> {
        api::get_classic_instance_disks(&*self.api, &self.record.id)
            .await
            .context("GetClassicInstanceDisks")
    }

    /// Resolved against a fresh fetch, not the cached record.
    async fn nics(&self) -> CloudResult<Vec<ClassicInstanceNic>> {
        let fresh = api::get_classic_instance(&*self.api, &self.record.id)
            .await
            .context("GetClassicInstance")?;
        Ok(resolve_network_identity(&self.record.id, &fresh)
            .map(|identity| ClassicInstanceNic::new(&self.record.id, identity))
            .into_iter()
            .collect())
    }

    async fn eip(&self) -> CloudResult<Option<ClassicEipAddress>> {
        Ok(resolve_external_address(&*self.api, &self.record).await)
    }

    async fn start_vm(&mut self) -> CloudResult<()> {
        api::start_vm(&*self.api, &self.record.id)
            .await
            .context("StartVM")?;
        self.wait_for(InstanceStatus::Running).await
    }

    async fn stop_vm(&mut self, opts: &StopOptions) -> CloudResult<()> {
        api::stop_classic_vm(&*self.api, &self.record.id, opts.is_force)
            .await
            .context("StopClassicVM")?;
        self.wait_for(InstanceStatus::Ready).await
    }

    /// Deletes the VM, then its security group and cloud service if it had
    /// them. Failures of the follow-up deletes are only logged.
    async fn delete_vm(&mut self) -> CloudResult<()> {
        api::delete_vm(&*self.api, &self.record.id)
            .await
            .context("DeleteVM")?;
        let network_profile = &self.record.properties.network_profile;
        if let Some(nsg) = network_profile.network_security_group.as_ref() {
            self.delete_quietly(&nsg.id).await;
        }
        if let Some(domain) = self.record.properties.domain_name.as_ref() {
            self.delete_quietly(&domain.id).await;
        }
        Ok(())
    }

    async fn attach_disk(&mut self, disk_id: &str) -> CloudResult<()> {
        let status = self.status().await;
        api::attach_disk(&*self.api, &self.record.id, disk_id)
            .await
            .context("AttachDisk")?;
        self.wait_for(status).await
    }

    async fn detach_disk(&mut self, disk_id: &str) -> CloudResult<()> {
        let status = self.status().await;
        api::detach_disk(&*self.api, &self.record.id, disk_id)
            .await
            .context("DetachDisk")?;
        self.wait_for(status).await
    }

    async fn assign_security_group(&mut self, secgroup_id: &str) -> CloudResult<()> {
        if let Some(current) = self.record.properties.network_profile.network_security_group.as_ref() {
            if current.id == secgroup_id {
                return Ok(());
            }
            let association = api::security_groups::association_id(&self.record.id, &current.name);
            self.delete_quietly(&association).await;
        }

        let secgroup = api::get_classic_security_group(&*self.api, secgroup_id)
            .await
            .context("GetClassicSecurityGroupDetails")?;
        api::associate_security_group(&*self.api, &self.record.id, &secgroup)
            .await
            .context("AssignSecurityGroup")
    }

    async fn change_config(&mut self, _opts: &ChangeConfigOptions) -> CloudResult<()> {
        Err(CloudError::NotImplemented("ChangeConfig"))
    }

    async fn deploy_vm(&mut self, _opts: &DeployOptions) -> CloudResult<()> {
        Err(CloudError::NotImplemented("DeployVM"))
    }

    async fn rebuild_root(&mut self, _opts: &RebuildRootOptions) -> CloudResult<String> {
        Err(CloudError::NotImplemented("RebuildRoot"))
    }

    async fn update_vm(&mut self, _opts: &InstanceUpdateOptions) -> CloudResult<()> {
        Err(CloudError::NotSupported("UpdateVM"))
    }

    async fn vnc_info(&self) -> CloudResult<VncInfo> {
        Err(CloudError::NotSupported("GetVNCInfo"))
    }

    async fn set_security_groups(&mut self, _secgroup_ids: &[String]) -> CloudResult<()> {
        Err(CloudError::NotSupported("SetSecurityGroups"))
    }

    async fn renew(&mut self, _cycle: &BillingCycle) -> CloudResult<()> {
        Err(CloudError::NotSupported("Renew"))
    }

    async fn update_user_data(&mut self, _user_data: &str) -> CloudResult<()> {
        Err(CloudError::NotSupported("UpdateUserData"))
    }
}
