#![allow(dead_code)]
//! In-memory `ClassicApi` used by the integration tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use azclassic::api::ClassicApi;
use azclassic::error::{ApiError, ApiResult};

pub const SUB: &str = "sub-1";
pub const VM_ID: &str =
    "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ClassicCompute/virtualMachines/vm-1";
pub const VNET_ID: &str =
    "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ClassicNetwork/virtualNetworks/vnet-1";

/// Records every call and answers GETs from canned responses.
///
/// A resource with several queued responses hands them out in order and then
/// keeps repeating the last one.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<HashMap<String, VecDeque<Value>>>,
    listing: Mutex<Vec<Value>>,
    failing: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
    updates: Mutex<Vec<Value>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, resource: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .entry(resource.to_string())
            .or_default()
            .push_back(value);
    }

    pub fn respond_seq(&self, resource: &str, values: Vec<Value>) {
        for v in values {
            self.respond(resource, v);
        }
    }

    pub fn set_listing(&self, values: Vec<Value>) {
        *self.listing.lock().unwrap() = values;
    }

    /// Make every call touching `resource` fail with HTTP 500.
    pub fn fail(&self, resource: &str) {
        self.failing.lock().unwrap().insert(resource.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn updates(&self) -> Vec<Value> {
        self.updates.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, resource: &str) -> ApiResult<()> {
        if self.failing.lock().unwrap().contains(resource) {
            return Err(ApiError::Http {
                status: 500,
                code: Some("InternalError".into()),
                message: format!("{} failed", resource),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ClassicApi for FakeApi {
    async fn get(&self, resource: &str, _params: &[(String, String)]) -> ApiResult<Value> {
        self.record(format!("GET {}", resource));
        self.check(resource)?;
        let mut responses = self.responses.lock().unwrap();
        match responses.get_mut(resource) {
            Some(queue) if queue.len() > 1 => Ok(queue.pop_front().unwrap()),
            Some(queue) if !queue.is_empty() => Ok(queue[0].clone()),
            _ => Err(ApiError::from_status(404, r#"{"error":{"code":"ResourceNotFound","message":"not found"}}"#)),
        }
    }

    async fn list(&self, resource_type: &str, _params: &[(String, String)]) -> ApiResult<Vec<Value>> {
        self.record(format!("LIST {}", resource_type));
        self.check(resource_type)?;
        Ok(self.listing.lock().unwrap().clone())
    }

    async fn perform(&self, resource: &str, action: &str, body: Option<Value>) -> ApiResult<Value> {
        let target = format!("{}/{}", resource, action);
        self.record(format!("POST {}", target));
        self.check(&target)?;
        if let Some(b) = body {
            self.updates.lock().unwrap().push(b);
        }
        Ok(Value::Null)
    }

    async fn delete(&self, resource: &str) -> ApiResult<()> {
        self.record(format!("DELETE {}", resource));
        self.check(resource)
    }

    async fn update(&self, body: Value) -> ApiResult<()> {
        let id = body.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string();
        self.record(format!("PUT {}", id));
        self.check(&id)?;
        self.updates.lock().unwrap().push(body);
        Ok(())
    }
}

/// Classic VM JSON with an optional instance view status.
pub fn instance_json(status: Option<&str>) -> Value {
    let mut v = json!({
        "id": VM_ID,
        "name": "vm-1",
        "type": "Microsoft.ClassicCompute/virtualMachines",
        "location": "East US",
        "tags": {"env": "test"},
        "properties": {
            "domainName": {
                "id": "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ClassicCompute/domainNames/vm-1",
                "name": "vm-1"
            },
            "hardwareProfile": {"size": "Medium", "platformGuestAgent": true},
            "networkProfile": {
                "virtualNetwork": {"staticIpAddress": "", "subnetNames": [], "id": VNET_ID, "name": "vnet-1"}
            },
            "storageProfile": {
                "operatingSystemDisk": {
                    "diskName": "vm-1-os",
                    "operatingSystem": "Windows",
                    "sourceImageName": "a699494373c04fc0bc8f2bb1389d6106__Windows-Server-2012-R2",
                    "diskSize": 127
                },
                "dataDisks": []
            }
        }
    });
    if let Some(s) = status {
        v["properties"]["instanceView"] = json!({
            "status": s,
            "powerState": "Started",
            "privateIpAddress": "10.0.0.9",
            "publicIpAddresses": ["52.0.0.9"]
        });
    }
    v
}

pub fn eip_json(id: &str, ip: &str, attached_to: Option<&str>) -> Value {
    let mut v = json!({
        "id": id,
        "name": id.rsplit('/').next().unwrap_or(id),
        "type": "Microsoft.ClassicNetwork/reservedIps",
        "location": "East US",
        "properties": {"ipAddress": ip, "status": "Created", "inUse": attached_to.is_some()}
    });
    if let Some(target) = attached_to {
        v["properties"]["attachedTo"] = json!({"id": target, "name": "vm"});
    }
    v
}

pub fn reserved_ip_id(name: &str) -> String {
    format!(
        "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ClassicNetwork/reservedIps/{}",
        name
    )
}

pub fn nsg_id(name: &str) -> String {
    format!(
        "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ClassicNetwork/networkSecurityGroups/{}",
        name
    )
}
