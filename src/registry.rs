use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A provisioned client API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub key: String,
    pub user_id: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(
        key: impl Into<String>,
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            key: key.into(),
            user_id: user_id.into(),
            display_name: display_name.into(),
            created_at,
        }
    }
}

/// Keys provisioned at startup: (key, user_id, display_name, created_at)
const BUILTIN_KEYS: &[(&str, &str, &str, &str)] = &[
    ("client-key-123", "user-001", "Test User 1", "2024-01-01T00:00:00Z"),
    ("client-key-456", "user-002", "Test User 2", "2024-01-15T00:00:00Z"),
];

/// Immutable mapping from API key to its credential record.
///
/// Built once at startup and shared read-only between request handlers.
/// Records keep the order they were provisioned in, which is the order
/// reported by [`Registry::keys`].
#[derive(Debug, Clone)]
pub struct Registry {
    records: Vec<CredentialRecord>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from a list of records.
    ///
    /// Fails if a key is empty or provisioned twice.
    pub fn new(records: Vec<CredentialRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.key.is_empty() {
                bail!("credential for user '{}' has an empty key", record.user_id);
            }
            if index.insert(record.key.clone(), position).is_some() {
                bail!("duplicate API key provisioned for user '{}'", record.user_id);
            }
        }

        Ok(Self { records, index })
    }

    /// The registry the service ships with
    pub fn builtin() -> Result<Self> {
        let records = BUILTIN_KEYS
            .iter()
            .map(|(key, user_id, display_name, created_at)| -> Result<CredentialRecord> {
                let created_at = DateTime::parse_from_rfc3339(created_at)
                    .with_context(|| format!("invalid created_at for user '{}'", user_id))?
                    .with_timezone(&Utc);
                Ok(CredentialRecord::new(*key, *user_id, *display_name, created_at))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(records)
    }

    pub fn lookup(&self, key: &str) -> Option<&CredentialRecord> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.key.as_str())
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn log_startup(&self) {
        if self.is_empty() {
            tracing::warn!("Registry is empty, every API key will be rejected");
        }
        tracing::info!("Loaded {} valid API keys", self.len());
        for record in self.records() {
            tracing::debug!(
                key = %crate::validation::redact(Some(&record.key)),
                user_id = %record.user_id,
                display_name = %record.display_name,
                created_at = %record.created_at.to_rfc3339(),
                "Provisioned API key"
            );
        }
    }
}
