//! ViaCEP postal directory adapter.
//!
//! See: <https://viacep.com.br/>

mod directory;
mod dto;

pub use directory::{DEFAULT_VIACEP_BASE_URL, ViaCepDirectory};
pub use dto::ViaCepResponse;
