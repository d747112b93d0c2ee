use cdi_freelance_core::RateTable;

/// Load the rate table: the built-in schedule, or an override file.
///
/// Override files may be partial; missing keys keep their default values.
pub fn load_rates(path: Option<&str>) -> Result<RateTable, Box<dyn std::error::Error>> {
    let rates = match path {
        Some(path) => {
            let rates: RateTable = crate::input::file::read_input(path)?;
            tracing::info!(path, fiscal_year = rates.fiscal_year, "loaded rate table override");
            rates
        }
        None => RateTable::default(),
    };
    rates.validate()?;
    Ok(rates)
}
