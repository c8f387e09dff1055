//! Adapter mapping Azure classic (pre-Resource-Manager) virtual machines
//! onto a vendor-neutral compute interface.
//!
//! - [`api`]: the REST verbs the adapter consumes plus an HTTP implementation
//! - [`models`]: serde records for classic VMs, disks, reserved IPs and NSGs
//! - [`cloudprovider`]: the neutral traits, normalized enums and the
//!   wait-for-status primitive
//! - [`services`]: [`services::ClassicInstance`] and the network / public IP
//!   resolvers

pub mod api;
pub mod cloudprovider;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{ApiError, ApiResult, CloudError, CloudResult};
