use crate::HealthRes;

/// Simple health service that can be used by any API surface
///
/// Provides a standardised way to check the health status of the recipes service.
#[derive(Clone, Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Returns a `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Recipes API is alive".into(),
        }
    }
}
