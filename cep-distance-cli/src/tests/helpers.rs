//! Stub collaborators and fixtures for CLI tests.

use cep_distance_core::test_support::{StubDirectory, StubGeocoder, StubRouting};
use cep_distance_core::{Address, DistanceResolver, ResolveDistance};

use crate::CliError;
use crate::distance::{DistanceArgs, DistanceConfig, ResolverBuilder};

pub(super) const ORIGIN: &str = "24220-031";
pub(super) const DESTINATION: &str = "01001-000";

pub(super) fn niteroi() -> Address {
    Address::new("Rua Gavião Peixoto", "Icaraí", "Niterói", "RJ")
}

pub(super) fn se() -> Address {
    Address::new("Praça da Sé", "Sé", "São Paulo", "SP")
}

pub(super) fn known_directory() -> StubDirectory {
    StubDirectory::default()
        .with_address("24220031", niteroi())
        .with_address("01001000", se())
}

pub(super) fn locating_geocoder() -> StubGeocoder {
    StubGeocoder::default()
        .with_coordinate(&niteroi(), -22.9068, -43.1729)
        .with_coordinate(&se(), -23.5505, -46.6333)
}

pub(super) fn args_for(origin: &str, destination: &str) -> DistanceArgs {
    DistanceArgs {
        origin_postal_code: Some(origin.to_owned()),
        destination_postal_code: Some(destination.to_owned()),
        ..DistanceArgs::default()
    }
}

/// Builds a resolver over in-memory collaborators.
#[derive(Debug, Clone)]
pub(super) struct StubResolverBuilder {
    pub(super) directory: StubDirectory,
    pub(super) geocoder: StubGeocoder,
    pub(super) routing: StubRouting,
}

impl StubResolverBuilder {
    pub(super) fn with_routing(routing: StubRouting) -> Self {
        Self {
            directory: known_directory(),
            geocoder: locating_geocoder(),
            routing,
        }
    }
}

impl ResolverBuilder for StubResolverBuilder {
    fn build(&self, _config: &DistanceConfig) -> Result<Box<dyn ResolveDistance>, CliError> {
        Ok(Box::new(DistanceResolver::new(
            self.directory.clone(),
            self.geocoder.clone(),
            self.routing.clone(),
        )))
    }
}
