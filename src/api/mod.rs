//! Classic Azure REST boundary.
//!
//! [`ClassicApi`] is the small set of verbs the adapter needs from a
//! transport. [`ClassicClient`] implements it over HTTP; the typed helpers in
//! the submodules work against any implementation.

pub mod client;
pub mod instances;
pub mod reserved_ips;
pub mod security_groups;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

// Re-export commonly used items
pub use client::{set_silent, ClassicClient};
pub use instances::{
    attach_disk, delete_vm, detach_disk, get_classic_instance, get_classic_instance_disks,
    get_classic_instances, start_vm, stop_classic_vm, CLASSIC_VM_RESOURCE_TYPE,
};
pub use reserved_ips::get_classic_eip;
pub use security_groups::{associate_security_group, get_classic_security_group};

/// Query parameters passed alongside a request
pub type QueryParams = Vec<(String, String)>;

#[async_trait]
pub trait ClassicApi: Send + Sync {
    /// Fetch a single resource by its full id (or a sub-path of it).
    async fn get(&self, resource: &str, params: &[(String, String)]) -> ApiResult<Value>;

    /// List every resource of `resource_type` in the subscription.
    async fn list(&self, resource_type: &str, params: &[(String, String)]) -> ApiResult<Vec<Value>>;

    /// POST `{resource}/{action}`.
    async fn perform(&self, resource: &str, action: &str, body: Option<Value>) -> ApiResult<Value>;

    async fn delete(&self, resource: &str) -> ApiResult<()>;

    /// PUT `body` at the id it carries.
    async fn update(&self, body: Value) -> ApiResult<()>;
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}
