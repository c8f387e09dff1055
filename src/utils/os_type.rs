use crate::cloudprovider::OsType;

pub fn normalize_os_type(os_name: &str) -> OsType {
    if os_name.trim().to_lowercase().starts_with("win") {
        OsType::Windows
    } else {
        OsType::Linux
    }
}
