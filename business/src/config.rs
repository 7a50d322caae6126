use holocron_states::{State, state_assign_impl};
use std::any::Any;
use ustr::Ustr;

/// Public SWAPI instance the app reads from when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://swapi.dev/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapiConfig {
    /// Root of the API, without the resource segment (e.g. `https://swapi.dev/api`).
    pub api_base_url: Ustr,
}

impl SwapiConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            api_base_url: Ustr::from(base_url.as_ref().trim_end_matches('/')),
        }
    }

    /// First page of the people collection.
    pub fn people_url(&self) -> String {
        format!("{}/people", self.api_base_url.as_str())
    }
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for SwapiConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send + 'static>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_swapi() {
        let config = SwapiConfig::default();
        assert_eq!(config.api_base_url, Ustr::from("https://swapi.dev/api"));
        assert_eq!(config.people_url(), "https://swapi.dev/api/people");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = SwapiConfig::new("http://127.0.0.1:4000/api/");
        assert_eq!(config.people_url(), "http://127.0.0.1:4000/api/people");
    }
}
