use crate::cloudprovider::InstanceStatus;

/// Map a classic instance-view status onto the normalized status.
///
/// Unrecognized values map to `Unknown` and are logged once per call.
pub fn normalize_status(instance_name: &str, raw: &str) -> InstanceStatus {
    match raw {
        "StoppedDeallocated" | "Stopped" => InstanceStatus::Ready,
        "ReadyRole" => InstanceStatus::Running,
        "RoleStateUnknown" => InstanceStatus::Unknown,
        _ => {
            tracing::error!("Unknown classic instance {} status {}", instance_name, raw);
            InstanceStatus::Unknown
        }
    }
}

/// Human readable label for a raw classic status, for CLI output.
pub fn format_status(raw: &str) -> String {
    match raw {
        "StoppedDeallocated" => "Stopped (deallocated)".to_string(),
        "ReadyRole" => "Running".to_string(),
        "Stopped" => "Stopped".to_string(),
        "RoleStateUnknown" => "Unknown".to_string(),
        "" => "—".to_string(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status() {
        assert_eq!(format_status("ReadyRole"), "Running");
        assert_eq!(format_status("StoppedDeallocated"), "Stopped (deallocated)");
        assert_eq!(format_status(""), "—");
        assert_eq!(format_status("Provisioning"), "Provisioning");
    }
}
