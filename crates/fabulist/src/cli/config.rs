//! `fabulist config` handler.

use fabulist::{FabulistConfig, FabulistResult};

/// Print the resolved configuration as TOML.
pub fn show_config(config: &FabulistConfig) -> FabulistResult<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
