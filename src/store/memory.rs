use super::{RecordStore, StoreError, StoreResult};
use crate::models::Request;

/// In-process slot
///
/// Holds the serialized array, so a save/load cycle goes through the same JSON
/// encoding as the file slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose slot already holds `records`
    pub fn with_records(records: &[Request]) -> StoreResult<Self> {
        let mut store = Self::new();
        store.save(records)?;
        Ok(store)
    }

    /// Make subsequent saves fail, as an unavailable storage backend would
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw slot contents
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl RecordStore for MemoryStore {
    fn exists(&self) -> bool {
        self.slot.is_some()
    }

    fn load(&self) -> StoreResult<Vec<Request>> {
        match &self.slot {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw).map_err(|e| StoreError::Parse {
                path: "<memory>".to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&mut self, records: &[Request]) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "storage is unavailable",
            )));
        }
        self.slot = Some(serde_json::to_string(records)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestFields;
    use chrono::Utc;

    #[test]
    fn test_memory_round_trip() {
        let records = vec![Request::pending(
            9,
            RequestFields::new("Arjun", "3rd Grade", "Mathematics", "Tables"),
            "manager1",
            Utc::now(),
        )];
        let store = MemoryStore::with_records(&records).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), records);
        assert!(store.raw().unwrap().starts_with('['));
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let mut store = MemoryStore::with_records(&[]).unwrap();
        store.fail_writes(true);

        let records = vec![Request::pending(
            1,
            RequestFields::new("a", "b", "c", "d"),
            "m",
            Utc::now(),
        )];
        let err = store.save(&records).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(store.load().unwrap().is_empty());
    }
}
