use super::StoreAdapter;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    value: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded snapshot, as if a previous session had saved.
    pub fn with_value(payload: &str) -> Self {
        Self {
            value: Some(payload.to_string()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl StoreAdapter for InMemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, payload: &str) -> Result<()> {
        self.value = Some(payload.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::TroveError;

    /// Store whose operations can be made to fail, for exercising error
    /// paths without a filesystem.
    #[derive(Debug, Default)]
    pub struct FailingStore {
        pub inner: InMemoryStore,
        pub fail_loads: bool,
        pub fail_saves: bool,
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_value(payload: &str) -> Self {
            Self {
                inner: InMemoryStore::with_value(payload),
                ..Self::default()
            }
        }
    }

    impl StoreAdapter for FailingStore {
        fn load(&self) -> Result<Option<String>> {
            if self.fail_loads {
                return Err(TroveError::Store("store is unavailable".to_string()));
            }
            self.inner.load()
        }

        fn save(&mut self, payload: &str) -> Result<()> {
            if self.fail_saves {
                return Err(TroveError::Store("store is full".to_string()));
            }
            self.inner.save(payload)
        }
    }
}
