// Status utilities
pub mod status_formatter;

// Resource id utilities
pub mod resource_id;

// Guest and network helpers
pub mod os_type;
pub mod mac_address;

// Re-export all utilities for convenient access
pub use status_formatter::{format_status, normalize_status};
pub use resource_id::{global_id_of, resource_group_of};
pub use os_type::normalize_os_type;
pub use mac_address::mac_from_ip;
