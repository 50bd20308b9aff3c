//! ViaCEP response types.

use cep_distance_core::{Address, AddressLookupError};
use serde::Deserialize;

/// ViaCEP `/ws/{cep}/json/` response body.
///
/// Unknown postal codes are answered with HTTP 200 and an `erro` member, so
/// every address field is optional at this layer.
#[derive(Debug, Default, Deserialize)]
pub struct ViaCepResponse {
    /// Street name.
    #[serde(default)]
    pub logradouro: Option<String>,
    /// Neighbourhood.
    #[serde(default)]
    pub bairro: Option<String>,
    /// City.
    #[serde(default)]
    pub localidade: Option<String>,
    /// Two-letter state code.
    #[serde(default)]
    pub uf: Option<String>,
    /// Present when the postal code is not registered.
    ///
    /// ViaCEP has sent both `true` and `"true"` here.
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    /// Check whether the body carries the not-found marker.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.erro.is_some()
    }

    /// Convert the body into an [`Address`] for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AddressLookupError::NotRegistered`] when the not-found marker
    /// is present and [`AddressLookupError::Malformed`] when city or state is
    /// missing.
    pub fn into_address(self, code: &str) -> Result<Address, AddressLookupError> {
        if self.is_not_found() {
            return Err(AddressLookupError::NotRegistered {
                code: code.to_owned(),
            });
        }

        let address = Address::new(
            self.logradouro.unwrap_or_default(),
            self.bairro.unwrap_or_default(),
            self.localidade.unwrap_or_default(),
            self.uf.unwrap_or_default(),
        );
        if !address.has_locality() {
            return Err(AddressLookupError::Malformed {
                message: format!("response for {code} has no city or state"),
            });
        }
        Ok(address)
    }
}
