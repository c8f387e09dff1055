pub mod classic_instance;
pub mod classic_disk;
pub mod classic_eip;
pub mod security_group;
pub mod vm_size;

use serde::{Deserialize, Deserializer};

// Re-export commonly used types
pub use classic_instance::{
    ClassicDisk, ClassicHardwareProfile, ClassicInstanceRecord, ClassicInstanceView,
    ClassicNetworkProfile, ClassicStorageProfile, ClassicVirtualMachineProperties,
    ClassicVirtualNetwork, SubResource,
};
pub use classic_disk::{ClassicDiskProperties, ClassicDiskRecord};
pub use classic_eip::{ClassicEipProperties, ClassicEipRecord};
pub use security_group::{AssociationProperties, ClassicSecurityGroup, SecurityGroupAssociation};
pub use vm_size::{lookup_vm_size, VmSize, CLASSIC_VM_SIZES};

/// Azure sends `null` for unset fields and empty collections; treat it like
/// a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
