//! Structured street addresses returned by the postal directory.

/// Country suffix appended to every free-text address.
pub const COUNTRY: &str = "Brasil";

/// A street address resolved from a postal code.
///
/// `street` and `neighbourhood` may be empty: some CEPs cover a whole city.
/// `city` and `state` are always populated for a successful lookup.
///
/// # Examples
///
/// ```
/// use cep_distance_core::Address;
///
/// let address = Address::new("Praça da Sé", "Sé", "São Paulo", "SP");
/// assert_eq!(address.free_text(), "Praça da Sé, Sé, São Paulo, SP, Brasil");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Street name (`logradouro`).
    pub street: String,
    /// Neighbourhood (`bairro`).
    pub neighbourhood: String,
    /// City (`localidade`).
    pub city: String,
    /// Two-letter state code (`uf`).
    pub state: String,
}

impl Address {
    /// Build an address from its parts.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        neighbourhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            neighbourhood: neighbourhood.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    /// Format as `"{street}, {neighbourhood}, {city}, {state}, Brasil"`.
    ///
    /// Empty parts are kept so the shape is stable for the geocoder and the
    /// routing provider.
    #[must_use]
    pub fn free_text(&self) -> String {
        format!(
            "{}, {}, {}, {}, {COUNTRY}",
            self.street, self.neighbourhood, self.city, self.state
        )
    }

    /// Whether the fields a successful lookup must populate are present.
    #[must_use]
    pub fn has_locality(&self) -> bool {
        !self.city.trim().is_empty() && !self.state.trim().is_empty()
    }
}
