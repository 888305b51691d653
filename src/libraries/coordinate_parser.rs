use crate::models::{Coordinate, CoordinateParseError};

const PAIR_SEPARATOR: char = ';';
const COMPONENT_SEPARATOR: char = ',';

/// Parse a `;`-separated list of `latitude,longitude` pairs.
///
/// Blank entries are skipped. Any malformed pair fails the whole parse,
/// so callers never see a partial list.
pub fn parse_coordinates(input: &str) -> Result<Vec<Coordinate>, CoordinateParseError> {
    input
        .split(PAIR_SEPARATOR)
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(parse_pair)
        .collect()
}

fn parse_pair(pair: &str) -> Result<Coordinate, CoordinateParseError> {
    let components: Vec<&str> = pair.split(COMPONENT_SEPARATOR).collect();

    let [latitude, longitude] = components.as_slice() else {
        return Err(CoordinateParseError::WrongArity {
            pair: pair.to_string(),
            found: components.len(),
        });
    };

    Ok(Coordinate::new(
        parse_component(latitude)?,
        parse_component(longitude)?,
    ))
}

fn parse_component(token: &str) -> Result<f64, CoordinateParseError> {
    let token = token.trim();
    let value = token
        .parse::<f64>()
        .map_err(|source| CoordinateParseError::InvalidNumber {
            token: token.to_string(),
            source,
        })?;

    if !value.is_finite() {
        return Err(CoordinateParseError::NonFinite {
            token: token.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_pairs_in_order() {
        let coordinates = parse_coordinates("34.05,-118.24;40.71,-74.01").unwrap();
        assert_eq!(
            coordinates,
            vec![
                Coordinate::new(34.05, -118.24),
                Coordinate::new(40.71, -74.01),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_no_coordinates() {
        assert!(parse_coordinates("").unwrap().is_empty());
        assert!(parse_coordinates("   ").unwrap().is_empty());
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let coordinates = parse_coordinates(";; 34.05,-118.24 ; ;40.71,-74.01;").unwrap();
        assert_eq!(coordinates.len(), 2);
        assert_eq!(coordinates[1], Coordinate::new(40.71, -74.01));
    }

    #[test]
    fn test_whitespace_around_components_is_ignored() {
        let coordinates = parse_coordinates(" 51.5 ,  -0.12 ").unwrap();
        assert_eq!(coordinates, vec![Coordinate::new(51.5, -0.12)]);
    }

    #[test]
    fn test_integers_and_exponents_are_accepted() {
        let coordinates = parse_coordinates("0,1e1").unwrap();
        assert_eq!(coordinates, vec![Coordinate::new(0.0, 10.0)]);
    }

    #[test]
    fn test_missing_partner_fails_whole_parse() {
        let err = parse_coordinates("34.05;40.71,-74.01").unwrap_err();
        assert_eq!(
            err,
            CoordinateParseError::WrongArity {
                pair: "34.05".to_string(),
                found: 1,
            }
        );
    }

    #[test]
    fn test_too_many_components_fails() {
        let err = parse_coordinates("1,2,3").unwrap_err();
        assert!(matches!(
            err,
            CoordinateParseError::WrongArity { found: 3, .. }
        ));
    }

    #[test]
    fn test_non_numeric_component_fails() {
        let err = parse_coordinates("34.05,west").unwrap_err();
        assert!(matches!(
            err,
            CoordinateParseError::InvalidNumber { ref token, .. } if token == "west"
        ));
    }

    #[test]
    fn test_empty_component_fails() {
        let err = parse_coordinates("34.05,").unwrap_err();
        assert!(matches!(err, CoordinateParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_non_finite_component_fails() {
        assert!(matches!(
            parse_coordinates("inf,0").unwrap_err(),
            CoordinateParseError::NonFinite { .. }
        ));
        assert!(matches!(
            parse_coordinates("0,NaN").unwrap_err(),
            CoordinateParseError::NonFinite { .. }
        ));
    }

    #[test]
    fn test_later_bad_pair_discards_earlier_good_ones() {
        assert!(parse_coordinates("34.05,-118.24;oops").is_err());
    }
}
