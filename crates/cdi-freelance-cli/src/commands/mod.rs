pub mod comparison;
pub mod freelance;
pub mod rates;
pub mod salaried;
