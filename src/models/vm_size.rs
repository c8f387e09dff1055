//! Classic VM size table (size SKU → cores / memory).
//!
//! The table ships inside the binary and is parsed once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

const CLASSIC_VM_SIZES_JSON: &str = include_str!("../../data/classic_vm_sizes.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmSize {
    pub number_of_cores: u32,
    #[serde(rename = "memoryInMB")]
    pub memory_in_mb: u32,
}

pub static CLASSIC_VM_SIZES: Lazy<HashMap<String, VmSize>> = Lazy::new(|| {
    match serde_json::from_str(CLASSIC_VM_SIZES_JSON) {
        Ok(sizes) => sizes,
        Err(e) => {
            tracing::error!(%e, "Failed to parse embedded classic VM size table");
            HashMap::new()
        }
    }
});

pub fn lookup_vm_size(size: &str) -> Option<VmSize> {
    CLASSIC_VM_SIZES.get(size).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_parses() {
        assert!(!CLASSIC_VM_SIZES.is_empty());
    }

    #[test]
    fn test_lookup_known_sizes() {
        assert_eq!(
            lookup_vm_size("Small"),
            Some(VmSize { number_of_cores: 1, memory_in_mb: 1792 })
        );
        assert_eq!(lookup_vm_size("A9").map(|s| s.number_of_cores), Some(16));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup_vm_size("small").is_none());
        assert!(lookup_vm_size("").is_none());
    }
}
