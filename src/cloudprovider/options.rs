/// Inputs for lifecycle operations
#[derive(Clone, Debug, Default)]
pub struct StopOptions {
    pub is_force: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ChangeConfigOptions {
    pub instance_type: Option<String>,
    pub cpu: Option<u32>,
    pub memory_mb: Option<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct DeployOptions {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub public_key: Option<String>,
    pub delete_keypair: bool,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct RebuildRootOptions {
    pub image_id: String,
    pub password: Option<String>,
    pub public_key: Option<String>,
    pub sys_size_gb: Option<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct InstanceUpdateOptions {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Renewal period, e.g. `1M` or `1Y`
#[derive(Clone, Debug)]
pub struct BillingCycle {
    pub count: u32,
    pub unit: char,
}

#[derive(Clone, Debug)]
pub struct VncInfo {
    pub protocol: String,
    pub url: String,
}
