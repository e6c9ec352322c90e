use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use super::{SearchEngine, SearchError};
use crate::config::SearchConfig;

/// Regions whose default engine is replaced, keyed by upper-case country code
pub static DEFAULT_REGION_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("CN", "baidu"),
        ("RU", "yandex-ru"),
        ("BY", "yandex.by"),
        ("TR", "yandex-tr"),
        ("KZ", "yandex-kz"),
    ])
});

/// Engines available to the browser plus the regional default rules.
///
/// Built from configuration and passed to whoever needs it; rebuild it when
/// the locale or geolocation changes.
#[derive(Debug, Clone)]
pub struct SearchEngineRegistry {
    engines: Vec<SearchEngine>,
    region_overrides: HashMap<String, String>,
}

impl SearchEngineRegistry {
    pub fn new(engines: Vec<SearchEngine>, region_overrides: HashMap<String, String>) -> Self {
        let region_overrides = region_overrides
            .into_iter()
            .map(|(region, engine)| (region.to_uppercase(), engine))
            .collect();
        Self {
            engines,
            region_overrides,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.engines.clone(), config.region_overrides.clone())
    }

    pub fn engines(&self) -> &[SearchEngine] {
        &self.engines
    }

    pub fn engine(&self, identifier: &str) -> Result<&SearchEngine, SearchError> {
        self.engines
            .iter()
            .find(|engine| engine.identifier.eq_ignore_ascii_case(identifier))
            .ok_or_else(|| SearchError::UnknownEngine(identifier.to_string()))
    }

    pub fn region_override(&self, country_code: &str) -> Option<&str> {
        self.region_overrides
            .get(&country_code.to_uppercase())
            .map(String::as_str)
    }

    /// Pick the default engine: the user's preference, then the regional
    /// override, then the first configured engine.
    pub fn default_engine(
        &self,
        country_code: Option<&str>,
        preferred: Option<&str>,
    ) -> Result<&SearchEngine, SearchError> {
        if let Some(preferred) = preferred {
            match self.engines.iter().find(|engine| engine.name == preferred) {
                Some(engine) => return Ok(engine),
                None => debug!("Preferred search engine {} not available", preferred),
            }
        }

        if let Some(identifier) = country_code.and_then(|code| self.region_override(code))
            && let Ok(engine) = self.engine(identifier)
        {
            debug!("Using regional search engine {}", engine.identifier);
            return Ok(engine);
        }

        self.engines.first().ok_or(SearchError::NoEngines)
    }

    pub fn default_engine_for(&self, config: &SearchConfig) -> Result<&SearchEngine, SearchError> {
        self.default_engine(
            config.country_code.as_deref(),
            config.preferred_engine.as_deref(),
        )
    }
}
