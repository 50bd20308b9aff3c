//! Distance resolution between two postal codes.
//!
//! [`DistanceResolver`] drives the pipeline:
//!
//! 1. validate both inputs, origin first;
//! 2. look both addresses up concurrently;
//! 3. ask the routing provider for a driving distance;
//! 4. when the provider is unavailable, geocode both addresses and fall back
//!    to the haversine distance.
//!
//! Each collaborator is called at most once per address and nothing is
//! retried.

use async_trait::async_trait;
use futures_util::future::join;
use log::{debug, info, warn};

use crate::ports::{Geocoder, PostalDirectory, PrimaryUnavailable, RoutingProvider};
use crate::{
    Address, Coordinate, Distance, DistanceReport, PostalCode, Provenance, ResolutionError, Side,
};

/// Resolve the distance between two raw postal-code strings.
///
/// Object-safe so callers can hold a `Box<dyn ResolveDistance>` regardless
/// of the collaborators behind it.
#[async_trait]
pub trait ResolveDistance: Send + Sync {
    /// Resolve the distance from `origin` to `destination`.
    ///
    /// Both arguments are raw user input; they are echoed unchanged in the
    /// returned report.
    async fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceReport, ResolutionError>;
}

/// Pipeline composed of a postal directory, a geocoder and a routing
/// provider.
///
/// # Examples
///
/// ```
/// use cep_distance_core::test_support::{StubDirectory, StubGeocoder, StubRouting};
/// use cep_distance_core::{Address, DistanceResolver, ResolveDistance};
///
/// let niteroi = Address::new("Rua A", "Centro", "Niterói", "RJ");
/// let se = Address::new("Praça da Sé", "Sé", "São Paulo", "SP");
/// let directory = StubDirectory::default()
///     .with_address("24220031", niteroi)
///     .with_address("01001000", se);
/// let resolver = DistanceResolver::new(
///     directory,
///     StubGeocoder::default(),
///     StubRouting::with_distance_km(431.2),
/// );
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let report = runtime.block_on(resolver.resolve("24220-031", "01001-000"))?;
/// assert_eq!(report.distance.kilometres, 431.2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DistanceResolver<D, G, R> {
    directory: D,
    geocoder: G,
    routing: R,
}

impl<D, G, R> DistanceResolver<D, G, R> {
    /// Compose a resolver from its collaborators.
    #[must_use]
    pub const fn new(directory: D, geocoder: G, routing: R) -> Self {
        Self {
            directory,
            geocoder,
            routing,
        }
    }
}

impl<D, G, R> DistanceResolver<D, G, R>
where
    D: PostalDirectory,
    G: Geocoder,
    R: RoutingProvider,
{
    async fn resolve_addresses(
        &self,
        origin: &PostalCode,
        destination: &PostalCode,
    ) -> Result<(Address, Address), ResolutionError> {
        let (origin_lookup, destination_lookup) = join(
            self.directory.lookup(origin),
            self.directory.lookup(destination),
        )
        .await;
        let origin_address = origin_lookup.map_err(|cause| {
            debug!("origin postal code {origin} did not resolve: {cause}");
            ResolutionError::PostalCodeNotFound { side: Side::Origin }
        })?;
        let destination_address = destination_lookup.map_err(|cause| {
            debug!("destination postal code {destination} did not resolve: {cause}");
            ResolutionError::PostalCodeNotFound {
                side: Side::Destination,
            }
        })?;
        Ok((origin_address, destination_address))
    }

    async fn geodesic_distance(
        &self,
        origin: &Address,
        destination: &Address,
    ) -> Result<Distance, ResolutionError> {
        // Sequential so the geocoder's courtesy spacing holds between calls.
        let origin_point = self.locate(origin, Side::Origin).await?;
        let destination_point = self.locate(destination, Side::Destination).await?;

        let kilometres = origin_point.haversine_km(&destination_point);
        if !kilometres.is_finite() {
            warn!("haversine produced a non-finite distance: {kilometres}");
            return Err(ResolutionError::TotalResolutionFailure);
        }
        Ok(Distance {
            kilometres,
            provenance: Provenance::Geodesic,
        })
    }

    async fn locate(&self, address: &Address, side: Side) -> Result<Coordinate, ResolutionError> {
        self.geocoder.locate(address).await.map_err(|cause| {
            warn!("could not geocode {side} address {:?}: {cause}", address.free_text());
            ResolutionError::CoordinateResolutionFailed { side }
        })
    }
}

#[async_trait]
impl<D, G, R> ResolveDistance for DistanceResolver<D, G, R>
where
    D: PostalDirectory,
    G: Geocoder,
    R: RoutingProvider,
{
    async fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceReport, ResolutionError> {
        let (origin_code, destination_code) = validate_inputs(origin, destination)?;
        let (origin_address, destination_address) = self
            .resolve_addresses(&origin_code, &destination_code)
            .await?;

        let routed = self
            .routing
            .driving_distance_km(
                &origin_address.free_text(),
                &destination_address.free_text(),
            )
            .await;
        let distance = match routed {
            Ok(kilometres) => Distance {
                kilometres,
                provenance: Provenance::Routing,
            },
            Err(cause) => {
                log_fallback(&cause);
                self.geodesic_distance(&origin_address, &destination_address)
                    .await?
            }
        };

        info!(
            "resolved {origin_code} -> {destination_code}: {:.2} km via {}",
            distance.kilometres, distance.provenance
        );
        Ok(DistanceReport {
            origin_postal_code: origin.to_owned(),
            destination_postal_code: destination.to_owned(),
            distance,
        })
    }
}

/// Validate both inputs; the origin failure wins when both are invalid.
fn validate_inputs(
    origin: &str,
    destination: &str,
) -> Result<(PostalCode, PostalCode), ResolutionError> {
    match (PostalCode::parse(origin), PostalCode::parse(destination)) {
        (Err(_), _) => Err(ResolutionError::InvalidPostalCode { side: Side::Origin }),
        (Ok(_), Err(_)) => Err(ResolutionError::InvalidPostalCode {
            side: Side::Destination,
        }),
        (Ok(origin_code), Ok(destination_code)) => Ok((origin_code, destination_code)),
    }
}

fn log_fallback(cause: &PrimaryUnavailable) {
    match cause {
        PrimaryUnavailable::NotConfigured => {
            info!("routing provider not configured; using geodesic fallback");
        }
        other => warn!("routing provider unavailable ({other}); using geodesic fallback"),
    }
}
