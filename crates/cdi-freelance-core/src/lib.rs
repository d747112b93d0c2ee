pub mod error;
pub mod rates;
pub mod types;

#[cfg(feature = "salaried")]
pub mod salaried;

#[cfg(feature = "freelance")]
pub mod freelance;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use error::CdiFreelanceError;
pub use rates::RateTable;
pub use types::*;

/// Standard result type for all cdi-freelance operations
pub type CdiFreelanceResult<T> = Result<T, CdiFreelanceError>;
