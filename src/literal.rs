//! Coercion of raw schema literals into typed scalars.

use crate::config::NumberCoercion;
use crate::element::{Scalar, ScalarKind};
use crate::error::RefractError;

/// Converts `literal` into a scalar of the requested kind.
///
/// Booleans are `true` only for the exact text `true`. Strings pass through
/// untouched. Numbers that do not parse to a finite value become `0` unless
/// `policy` is [`NumberCoercion::Strict`].
pub fn coerce(
    kind: ScalarKind,
    literal: &str,
    policy: NumberCoercion,
) -> Result<Scalar, RefractError> {
    let scalar = match kind {
        ScalarKind::Boolean => Scalar::Boolean(literal == "true"),
        ScalarKind::Number => Scalar::Number(parse_number(literal, policy)?),
        ScalarKind::String => Scalar::String(literal.to_string()),
    };
    Ok(scalar)
}

fn parse_number(literal: &str, policy: NumberCoercion) -> Result<f64, RefractError> {
    match literal.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ if policy == NumberCoercion::Lenient => {
            log::trace!("malformed number literal '{literal}' coerced to 0");
            Ok(0.0)
        }
        _ => Err(RefractError::Coercion {
            literal: literal.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(kind: ScalarKind, literal: &str) -> Scalar {
        coerce(kind, literal, NumberCoercion::Lenient).unwrap()
    }

    #[test]
    fn test_boolean_only_exact_true() {
        assert_eq!(lenient(ScalarKind::Boolean, "true"), Scalar::Boolean(true));
        for literal in ["True", "TRUE", "1", "", "false", "yes", " true"] {
            assert_eq!(
                lenient(ScalarKind::Boolean, literal),
                Scalar::Boolean(false),
                "literal {literal:?}"
            );
        }
    }

    #[test]
    fn test_number_parses_decimals() {
        assert_eq!(lenient(ScalarKind::Number, "42"), Scalar::Number(42.0));
        assert_eq!(lenient(ScalarKind::Number, "-3.5"), Scalar::Number(-3.5));
        assert_eq!(lenient(ScalarKind::Number, "1e3"), Scalar::Number(1000.0));
        assert_eq!(lenient(ScalarKind::Number, " 7 "), Scalar::Number(7.0));
    }

    #[test]
    fn test_malformed_number_is_zero_when_lenient() {
        for literal in ["", "abc", "12abc", "1,5", "NaN", "nan", "inf", "-infinity", "1e999"] {
            assert_eq!(
                lenient(ScalarKind::Number, literal),
                Scalar::Number(0.0),
                "literal {literal:?}"
            );
        }
    }

    #[test]
    fn test_malformed_number_fails_when_strict() {
        let result = coerce(ScalarKind::Number, "abc", NumberCoercion::Strict);
        assert_eq!(
            result,
            Err(RefractError::Coercion {
                literal: "abc".to_string()
            })
        );
        for literal in ["NaN", "inf", "-infinity"] {
            assert_eq!(
                coerce(ScalarKind::Number, literal, NumberCoercion::Strict),
                Err(RefractError::Coercion {
                    literal: literal.to_string()
                })
            );
        }
        assert_eq!(
            coerce(ScalarKind::Number, "2.5", NumberCoercion::Strict),
            Ok(Scalar::Number(2.5))
        );
    }

    #[test]
    fn test_string_passes_through() {
        assert_eq!(
            lenient(ScalarKind::String, "  \"quoted\\n\" "),
            Scalar::String("  \"quoted\\n\" ".to_string())
        );
    }
}
