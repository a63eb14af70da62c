use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - The parser's year window is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Parser validation
    if config.parser.earliest_year == 0 {
        return Err(ConfigError::ValidationError(
            "parser.earliest_year cannot be 0".to_string(),
        ));
    }

    let window = config.parser.year_window();
    if window.first() > window.last() {
        return Err(ConfigError::ValidationError(format!(
            "parser.earliest_year {} is after the last accepted year {}",
            window.first(),
            window.last()
        )));
    }

    Ok(())
}
