//! API key for the routing provider.

use std::fmt;

/// Value shipped in sample configuration in place of a real key.
pub const PLACEHOLDER_API_KEY: &str = "SUA_CHAVE_AQUI";

/// A usable Distance Matrix API key.
///
/// The `Debug` output never shows the key.
#[derive(Clone, PartialEq, Eq)]
pub struct RoutingCredential(String);

impl RoutingCredential {
    /// Interpret a configured key.
    ///
    /// Absent, blank and placeholder values mean "not configured".
    ///
    /// # Examples
    ///
    /// ```
    /// use cep_distance_data::RoutingCredential;
    ///
    /// assert!(RoutingCredential::from_setting(None).is_none());
    /// assert!(RoutingCredential::from_setting(Some("SUA_CHAVE_AQUI".into())).is_none());
    /// assert!(RoutingCredential::from_setting(Some("AIza-key".into())).is_some());
    /// ```
    #[must_use]
    pub fn from_setting(setting: Option<String>) -> Option<Self> {
        let key = setting?;
        let trimmed = key.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER_API_KEY {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RoutingCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoutingCredential(<redacted>)")
    }
}
