//! Filter vector parsing for `tinct apply`.

use tinct_core::models::{FilterParam, FilterValues, PARAM_COUNT};

/// Parse a filter vector in format "I,S,SAT,H,B,C"
///
/// # Arguments
/// * `values_str` - Six comma-separated numbers: invert %, sepia %,
///   saturate %, hue-rotate unit (0-100, x3.6 = degrees), brightness %,
///   contrast %
///
/// # Returns
/// The parsed vector, wrapped/clamped into each parameter's domain
pub fn parse_filter_values(values_str: &str) -> Result<FilterValues, String> {
    let parts: Vec<&str> = values_str.split(',').collect();
    if parts.len() != PARAM_COUNT {
        return Err(format!(
            "Filter values must be in format I,S,SAT,H,B,C (e.g., 50,20,3750,50,100,100), got: {}",
            values_str
        ));
    }

    let mut values = [0.0; PARAM_COUNT];
    for ((slot, part), param) in values.iter_mut().zip(&parts).zip(FilterParam::ALL) {
        let value = part
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid {} value: {}", param.as_str(), part))?;
        if !value.is_finite() {
            return Err(format!("{} value must be finite, got: {}", param.as_str(), part));
        }
        *slot = value;
    }

    Ok(FilterValues::new(values).normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_values() {
        let values = parse_filter_values("50, 20, 3750, 50, 100, 100").unwrap();
        assert_eq!(values, FilterValues::INITIAL);
    }

    #[test]
    fn test_parse_filter_values_normalizes() {
        let values = parse_filter_values("150,0,100,-25,100,300").unwrap();
        assert_eq!(values.get(FilterParam::Invert), 100.0);
        assert_eq!(values.get(FilterParam::HueRotate), 75.0);
        assert_eq!(values.get(FilterParam::Contrast), 200.0);
    }

    #[test]
    fn test_parse_filter_values_rejects_bad_input() {
        assert!(parse_filter_values("1,2,3").is_err());
        assert!(parse_filter_values("1,2,3,4,5,6,7").is_err());

        let err = parse_filter_values("1,2,x,4,5,6").unwrap_err();
        assert!(err.contains("saturate"), "{}", err);

        assert!(parse_filter_values("1,2,3,inf,5,6").is_err());
        assert!(parse_filter_values("NaN,2,3,4,5,6").is_err());
    }
}
