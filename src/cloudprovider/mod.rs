//! Vendor-neutral compute contract consumed by the multi-cloud layer.
//!
//! Concrete providers implement [`CloudInstance`] together with the
//! capability traits for their NICs, disks and elastic IPs.

pub mod options;
pub mod wait;

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::CloudResult;

pub use options::{
    BillingCycle, ChangeConfigOptions, DeployOptions, InstanceUpdateOptions, RebuildRootOptions,
    StopOptions, VncInfo,
};
pub use wait::{wait_status, WaitConfig, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};

pub const HYPERVISOR_AZURE: &str = "azure";
pub const OS_ARCH_X86_64: &str = "x86_64";
pub const BILLING_TYPE_POSTPAID: &str = "postpaid";

/// Normalized power state understood by the multi-cloud layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstanceStatus {
    Ready,
    Running,
    /// The status could not be determined
    Unknown,
}

impl InstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Ready => "ready",
            InstanceStatus::Running => "running",
            InstanceStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsType {
    Linux,
    Windows,
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsType::Linux => f.write_str("Linux"),
            OsType::Windows => f.write_str("Windows"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiosType {
    Bios,
    Uefi,
}

impl fmt::Display for BiosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiosType::Bios => f.write_str("BIOS"),
            BiosType::Uefi => f.write_str("UEFI"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiskType {
    System,
    Data,
}

impl fmt::Display for DiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskType::System => f.write_str("sys"),
            DiskType::Data => f.write_str("data"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EipMode {
    /// Address that belongs to the instance itself
    InstancePublicIp,
    /// Reserved address that can move between instances
    ElasticIp,
}

impl fmt::Display for EipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EipMode::InstancePublicIp => f.write_str("public_ip"),
            EipMode::ElasticIp => f.write_str("elastic_ip"),
        }
    }
}

/// Anything whose status can be refreshed from the remote side and read back.
#[async_trait]
pub trait StatusSource: Send {
    /// Name used in logs and timeout errors
    fn name(&self) -> &str;

    /// Re-fetch the remote state, replacing the local copy.
    async fn refresh(&mut self) -> CloudResult<()>;

    /// Status of the local copy as of the last refresh. Never calls out.
    fn cached_status(&self) -> InstanceStatus;

    /// Current normalized status, fetching first if the local copy cannot
    /// answer.
    async fn status(&mut self) -> InstanceStatus {
        self.cached_status()
    }
}

pub trait CloudNic {
    fn id(&self) -> &str;
    fn ip(&self) -> &str;
    fn mac(&self) -> String;
    fn driver(&self) -> &str;
    fn network_id(&self) -> &str;
    fn instance_id(&self) -> &str;
}

pub trait CloudDisk {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn global_id(&self) -> String;
    fn disk_type(&self) -> DiskType;
    fn size_gb(&self) -> i32;
    fn cache_mode(&self) -> &str;
    fn template_id(&self) -> &str;
    fn access_path(&self) -> &str;
    fn storage_id(&self) -> &str;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn status(&self) -> &str;
}

pub trait CloudEip {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn global_id(&self) -> String;
    fn ip_addr(&self) -> &str;
    fn mode(&self) -> EipMode;
    fn associated_instance_id(&self) -> Option<&str>;
    fn status(&self) -> &str;
}

/// A provider's virtual machine as seen by the multi-cloud layer.
#[async_trait]
pub trait CloudInstance: StatusSource {
    type Nic: CloudNic + Send;
    type Disk: CloudDisk + Send;
    type Eip: CloudEip + Send;

    fn id(&self) -> &str;
    fn hostname(&self) -> &str;
    fn global_id(&self) -> String;
    fn project_id(&self) -> String;
    fn tags(&self) -> HashMap<String, String>;
    fn sys_tags(&self) -> HashMap<String, String>;

    fn hypervisor(&self) -> &str;
    fn instance_type(&self) -> &str;
    fn vcpu_count(&self) -> u32;
    fn vmem_size_mb(&self) -> u32;
    fn machine(&self) -> &str;
    fn boot_order(&self) -> &str;
    fn vga(&self) -> &str;
    fn vdi(&self) -> &str;
    fn bios(&self) -> BiosType;

    fn os_type(&self) -> OsType;
    fn full_os_name(&self) -> &str;
    fn os_arch(&self) -> &str;
    fn os_version(&self) -> &str;
    fn os_dist(&self) -> &str;
    fn os_lang(&self) -> &str;

    fn security_group_ids(&self) -> Vec<String>;
    fn billing_type(&self) -> &str;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn expired_at(&self) -> Option<DateTime<Utc>>;
    fn error(&self) -> Option<String>;

    async fn disks(&self) -> CloudResult<Vec<Self::Disk>>;
    async fn nics(&self) -> CloudResult<Vec<Self::Nic>>;
    async fn eip(&self) -> CloudResult<Option<Self::Eip>>;

    async fn start_vm(&mut self) -> CloudResult<()>;
    async fn stop_vm(&mut self, opts: &StopOptions) -> CloudResult<()>;
    async fn delete_vm(&mut self) -> CloudResult<()>;
    async fn attach_disk(&mut self, disk_id: &str) -> CloudResult<()>;
    async fn detach_disk(&mut self, disk_id: &str) -> CloudResult<()>;
    async fn assign_security_group(&mut self, secgroup_id: &str) -> CloudResult<()>;

    async fn change_config(&mut self, opts: &ChangeConfigOptions) -> CloudResult<()>;
    async fn deploy_vm(&mut self, opts: &DeployOptions) -> CloudResult<()>;
    async fn rebuild_root(&mut self, opts: &RebuildRootOptions) -> CloudResult<String>;
    async fn update_vm(&mut self, opts: &InstanceUpdateOptions) -> CloudResult<()>;
    async fn vnc_info(&self) -> CloudResult<VncInfo>;
    async fn set_security_groups(&mut self, secgroup_ids: &[String]) -> CloudResult<()>;
    async fn renew(&mut self, cycle: &BillingCycle) -> CloudResult<()>;
    async fn update_user_data(&mut self, user_data: &str) -> CloudResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(InstanceStatus::Ready.to_string(), "ready");
        assert_eq!(InstanceStatus::Running.to_string(), "running");
        assert_eq!(InstanceStatus::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_labels() {
        assert_eq!(DiskType::System.to_string(), "sys");
        assert_eq!(EipMode::InstancePublicIp.to_string(), "public_ip");
        assert_eq!(BiosType::Bios.to_string(), "BIOS");
        assert_eq!(OsType::Windows.to_string(), "Windows");
    }
}
