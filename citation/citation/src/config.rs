use crate::error::CitationError;
use std::env;
use std::str::FromStr;

/// Runs `func` with the value of the environment variable `key`.
///
/// An unset or empty variable is reported through `error_fn` as a
/// [`CitationError::Configuration`] and `func` is never called.
pub fn with_config_key<T, F, R>(key: &str, error_fn: F, func: impl FnOnce(String) -> R) -> R
where
    F: FnOnce(CitationError) -> T,
    R: From<T>,
{
    match env::var(key) {
        Ok(value) if !value.is_empty() => func(value),
        _ => {
            let error = CitationError::Configuration(format!("Missing env var: {}", key));
            R::from(error_fn(error))
        }
    }
}

/// Reads and parses an optional environment variable.
///
/// Unset or empty gives `default`; a value that does not parse is a
/// [`CitationError::Configuration`].
pub fn get_config_or<T: FromStr>(key: &str, default: T) -> Result<T, CitationError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().parse().map_err(|_| {
            CitationError::Configuration(format!("Invalid value for env var {}: {:?}", key, value))
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reports_configuration_error() {
        let result: Result<String, CitationError> =
            with_config_key("GOLEM_CITATION_TEST_UNSET_KEY", Err, |value| Ok(value));
        assert!(matches!(result, Err(CitationError::Configuration(msg)) if msg.contains("GOLEM_CITATION_TEST_UNSET_KEY")));
    }

    #[test]
    fn test_get_config_or_default() {
        assert_eq!(get_config_or("GOLEM_CITATION_TEST_UNSET_LEN", 360usize), Ok(360));
    }

    #[test]
    fn test_get_config_or_rejects_unparsable_value() {
        env::set_var("GOLEM_CITATION_TEST_BAD_LEN", "-5");
        let result = get_config_or("GOLEM_CITATION_TEST_BAD_LEN", 360usize);
        assert!(matches!(result, Err(CitationError::Configuration(msg)) if msg.contains("GOLEM_CITATION_TEST_BAD_LEN")));

        env::set_var("GOLEM_CITATION_TEST_GOOD_LEN", " 42 ");
        assert_eq!(get_config_or("GOLEM_CITATION_TEST_GOOD_LEN", 360usize), Ok(42));
    }
}
