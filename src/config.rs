use serde::Deserialize;

/// How number literals that fail to parse are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberCoercion {
    /// Malformed numbers become `0`.
    #[default]
    Lenient,
    /// Malformed numbers fail with [`crate::error::RefractError::Coercion`].
    Strict,
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub number_coercion: NumberCoercion,
}

impl Config {
    pub fn strict() -> Self {
        Self {
            number_coercion: NumberCoercion::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(Config::default().number_coercion, NumberCoercion::Lenient);
    }

    #[test]
    fn test_deserialize_config() {
        let config: Config = serde_json::from_str(r#"{ "numberCoercion": "strict" }"#).unwrap();
        assert_eq!(config, Config::strict());

        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
