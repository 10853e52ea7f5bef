//! Identifier generators for created resources.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::traits::IdGenerator;

/// Random 128-bit identifiers (UUIDv4) in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers `<prefix>-1`, `<prefix>-2`, ...
///
/// For tests and fixtures that need to predict document keys.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_distinct_v4() {
        let ids = UuidIds;
        let generated: HashSet<String> = (0..100).map(|_| ids.generate()).collect();
        assert_eq!(generated.len(), 100);
        for id in &generated {
            let parsed = Uuid::parse_str(id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[test]
    fn test_sequential_ids_count_from_one() {
        let ids = SequentialIds::new("note");
        assert_eq!(ids.generate(), "note-1");
        assert_eq!(ids.generate(), "note-2");
        assert_eq!(ids.generate(), "note-3");
    }
}
