//! Facade crate for the Reward Hub slices and shared modules.
//! Re-exports domain/kernel primitives and bootstraps the server slices.
//! Keep this crate thin: it composes other crates, it does not implement
//! business logic.
//!
//! ## Usage
//! - Applications depend on `rhub` only, enabling `server` when they host
//!   the sheet backend.
//! - Call [`init`] (server) to build the slices registered in the API state.

pub use rhub_domain as domain;
pub use rhub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use rhub_kernel::server::system_router;
        pub use rhub_sheet::router as sheet_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use rhub_campaign as campaign;
    pub use rhub_partners as partners;
    pub use rhub_sheet as sheet;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "campaign",
        "partners",
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "server")]
        "sheet",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled slices for server mode.
///
/// # Errors
/// Returns an error if any slice fails to initialize.
#[cfg(feature = "server")]
pub async fn init(
    config: &domain::config::ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Sheet backend
    slices.push(features::sheet::init(config).await?);

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn core_slices_are_always_enabled() {
        assert!(features::is_enabled("campaign"));
        assert!(features::is_enabled("partners"));
        assert!(!features::is_enabled("identity"));
    }
}
