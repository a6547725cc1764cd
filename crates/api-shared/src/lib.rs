//! # API Shared
//!
//! Wire types shared by the recipes APIs and tooling.
//!
//! Contains:
//! - Response bodies (`ErrorRes`, `MessageRes`, `HealthRes`)
//! - Shared services like `HealthService`
//!
//! Every type derives `utoipa::ToSchema` so it can be listed in the OpenAPI document.

pub mod health;
pub mod responses;

pub use health::HealthService;
pub use responses::{ErrorRes, HealthRes, MessageRes};
