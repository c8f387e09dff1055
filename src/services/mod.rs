pub mod instance_service;
pub mod network_service;
pub mod eip_service;
pub mod disk_service;

// Re-export commonly used items
pub use instance_service::{ClassicInstance, InstanceContext};
pub use network_service::{resolve_network_identity, ClassicInstanceNic, NetworkIdentity};
pub use eip_service::{resolve_external_address, ClassicEipAddress};
