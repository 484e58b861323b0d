use super::Audit;
use crate::endpoint::END_ENTITY_FILES;
use crate::error::{Result, ValidationError};
use crate::payload::{require_text, Payload};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A file uploaded to an entity.
///
/// Uploading needs a multipart body, so files can be listed, renamed and
/// deleted through this client but not created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityFile {
    pub id: i64,
    pub entity_id: i64,
    #[serde(flatten)]
    pub simple: SimpleEntityFile,
    /// Size in bytes
    pub size: i64,
    /// Storage path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// MIME type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEntityFile {
    pub name: String,
    /// "all", "admin", "self" or "members"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl Payload for SimpleEntityFile {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Files of an entity
#[derive(Debug, Clone)]
pub struct EntityFileService {
    svc: Service,
}

impl EntityFileService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        EntityFileService {
            svc: Service::new(rest, END_ENTITY_FILES, "Entity File"),
        }
    }

    pub fn index(
        &self,
        camp_id: i64,
        ent_id: i64,
        sync: Option<&Time>,
    ) -> Result<List<EntityFile>> {
        self.svc.index(self.svc.entity(camp_id, ent_id), sync)
    }

    pub fn get(&self, camp_id: i64, ent_id: i64, file_id: i64) -> Result<EntityFile> {
        self.svc.get(self.svc.entity(camp_id, ent_id), file_id)
    }

    pub fn update(
        &self,
        camp_id: i64,
        ent_id: i64,
        file_id: i64,
        file: &SimpleEntityFile,
    ) -> Result<EntityFile> {
        self.svc.update(self.svc.entity(camp_id, ent_id), file_id, file)
    }

    pub fn delete(&self, camp_id: i64, ent_id: i64, file_id: i64) -> Result<()> {
        self.svc.delete(self.svc.entity(camp_id, ent_id), file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::reencode;

    #[test]
    fn test_entity_file_from_api() {
        let json = r#"{
            "id": 4,
            "entity_id": 10,
            "name": "map.pdf",
            "visibility": "all",
            "size": 20480,
            "path": "entities/files/map.pdf",
            "type": "application/pdf"
        }"#;

        let file: EntityFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.size, 20480);
        assert_eq!(file.kind.as_deref(), Some("application/pdf"));
        assert_eq!(file.simple.visibility.as_deref(), Some("all"));
    }

    #[test]
    fn test_entity_file_round_trip() {
        let simple = SimpleEntityFile {
            name: "map.pdf".into(),
            visibility: Some("admin".into()),
        };
        let full: EntityFile = reencode(&simple);
        assert_eq!(full.simple, simple);
    }
}
