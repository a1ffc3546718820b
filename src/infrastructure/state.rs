//! Application state shared by the HTTP handlers

use std::sync::Arc;

use crate::domain::DomainError;
use crate::infrastructure::config::Config;
use crate::modules::cataloguing_pro::{CallNumberGenerator, ClassificationTable};

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Call-number generator (immutable, shared)
    pub generator: Arc<CallNumberGenerator>,
    /// Maximum call numbers per shelf-order request
    pub max_batch: usize,
}

impl AppState {
    pub fn new(generator: CallNumberGenerator, max_batch: usize) -> Self {
        Self {
            generator: Arc::new(generator),
            max_batch,
        }
    }

    /// Build the state from configuration, loading a custom classification
    /// table when one is configured.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let table = match &config.classification_table {
            Some(path) => ClassificationTable::load(path)?,
            None => ClassificationTable::builtin().clone(),
        };
        let generator = CallNumberGenerator::new(Arc::new(table))
            .with_title_cutter(config.title_cutter);
        Ok(Self::new(generator, config.max_batch))
    }

    pub fn table_version(&self) -> &str {
        &self.generator.table().version
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            CallNumberGenerator::default(),
            crate::infrastructure::config::DEFAULT_MAX_BATCH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordView;

    fn config_with_table(path: &str) -> Config {
        let path = path.to_string();
        Config::from_lookup(|key| (key == "LCC_CLASSIFICATION_TABLE").then(|| path.clone()))
    }

    #[test]
    fn test_from_config_loads_table_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, r#"{"version": "local-7", "entries": [["musica", "M"]]}"#).unwrap();

        let state = AppState::from_config(&config_with_table(path.to_str().unwrap())).unwrap();
        assert_eq!(state.table_version(), "local-7");
        assert_eq!(state.generator.table().classify("Teoría de la música"), "M");

        let (code, _) = state
            .generator
            .generate(&RecordView::new("Armonía"), "Música");
        assert!(code.starts_with("M "), "{}", code);
    }

    #[test]
    fn test_from_config_rejects_bad_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, r#"{"version": "x", "entries": [["musica", "M780"]]}"#).unwrap();

        let result = AppState::from_config(&config_with_table(path.to_str().unwrap()));
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let missing = dir.path().join("missing.json");
        let result = AppState::from_config(&config_with_table(missing.to_str().unwrap()));
        assert!(matches!(result, Err(DomainError::Io(_))));
    }

    #[test]
    fn test_default_uses_builtin_table() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert_eq!(state.table_version(), AppState::default().table_version());
    }
}
