use chrono::{DateTime, Utc};

use crate::cloudprovider::{CloudDisk, DiskType};
use crate::models::ClassicDiskRecord;
use crate::utils::global_id_of;

impl CloudDisk for ClassicDiskRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        if self.properties.disk_name.is_empty() {
            &self.name
        } else {
            &self.properties.disk_name
        }
    }

    fn global_id(&self) -> String {
        global_id_of(&self.id)
    }

    fn disk_type(&self) -> DiskType {
        if self.properties.operating_system.is_empty() {
            DiskType::Data
        } else {
            DiskType::System
        }
    }

    fn size_gb(&self) -> i32 {
        if self.properties.disk_size_gb > 0 {
            self.properties.disk_size_gb
        } else {
            self.properties.disk_size
        }
    }

    fn cache_mode(&self) -> &str {
        &self.properties.caching
    }

    fn template_id(&self) -> &str {
        &self.properties.source_image_name
    }

    fn access_path(&self) -> &str {
        &self.properties.vhd_uri
    }

    fn storage_id(&self) -> &str {
        &self.properties.storage_account.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.properties.created_time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    fn status(&self) -> &str {
        "ready"
    }
}
