/// Project id of a resource: `"<subscription>/<resourcegroup>"`, lower-cased.
///
/// Returns an empty string when the id has no resource group segment.
pub fn resource_group_of(id: &str) -> String {
    let info: Vec<String> = id.to_lowercase().split('/').map(|s| s.to_string()).collect();
    let idx = match info.iter().position(|s| s == "resourcegroups") {
        Some(i) => i + 1,
        None => return String::new(),
    };
    if info.len() > 2 && idx < info.len() - 1 {
        format!("{}/{}", info[2], info[idx])
    } else {
        String::new()
    }
}

pub fn global_id_of(id: &str) -> String {
    id.to_lowercase()
}
