//! The interactive input surface: six labeled controls with fixed domains
//! and defaults, collected over any reader/writer pair.
//!
//! The controls do all range enforcement themselves. A raw line outside a
//! control's domain is rejected and re-prompted; application logic only ever
//! sees in-domain values. Domain endpoints are accepted.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::predictor::PassengerRecord;

pub const PCLASS_CHOICES: [u8; 3] = [1, 2, 3];
pub const PCLASS_DEFAULT: u8 = 3;

/// The default is the first option.
pub const SEX_CHOICES: [&str; 2] = ["male", "female"];

pub const AGE_MIN: u8 = 0;
pub const AGE_MAX: u8 = 80;
pub const AGE_DEFAULT: u8 = 25;

pub const SIBSP_MIN: u8 = 0;
pub const SIBSP_MAX: u8 = 10;
pub const SIBSP_DEFAULT: u8 = 0;

pub const PARCH_MIN: u8 = 0;
pub const PARCH_MAX: u8 = 10;
pub const PARCH_DEFAULT: u8 = 0;

pub const FARE_MIN: f64 = 0.0;
pub const FARE_MAX: f64 = 600.0;
pub const FARE_DEFAULT: f64 = 7.25;

/// Raised when a raw input line is rejected by an input control.
#[derive(Debug, PartialEq, Eq)]
pub enum ControlError {
    /// The line could not be parsed as the control's value type
    Unparseable(String),
    /// The parsed value falls outside the control's fixed domain
    OutOfDomain(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable(msg) => write!(f, "Not a valid value: {}", msg),
            Self::OutOfDomain(msg) => write!(f, "Out of range: {}", msg),
        }
    }
}

/// Parses a discrete integer choice. Empty input selects the default.
pub fn choice_u8(raw: &str, choices: &[u8], default: u8) -> Result<u8, ControlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    let value: u8 = raw
        .parse()
        .map_err(|_| ControlError::Unparseable(raw.to_string()))?;
    if !choices.contains(&value) {
        return Err(ControlError::OutOfDomain(format!(
            "{} is not one of {:?}",
            value, choices
        )));
    }
    Ok(value)
}

/// Parses a discrete label choice, case-insensitively. Empty input selects
/// the first option. Returns the canonical option spelling.
pub fn choice_label<'a>(raw: &str, options: &[&'a str]) -> Result<&'a str, ControlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return options
            .first()
            .copied()
            .ok_or_else(|| ControlError::OutOfDomain("no options defined".to_string()));
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(raw))
        .copied()
        .ok_or_else(|| {
            ControlError::OutOfDomain(format!("'{}' is not one of {}", raw, options.join("/")))
        })
}

/// Parses a bounded integer. Empty input selects the default; both bounds
/// are inclusive.
pub fn bounded_u8(raw: &str, min: u8, max: u8, default: u8) -> Result<u8, ControlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    let value: u8 = raw
        .parse()
        .map_err(|_| ControlError::Unparseable(raw.to_string()))?;
    if value < min || value > max {
        return Err(ControlError::OutOfDomain(format!(
            "{} is not within {}..={}",
            value, min, max
        )));
    }
    Ok(value)
}

/// Parses a bounded real number. Empty input selects the default; both
/// bounds are inclusive. Non-finite values are rejected.
pub fn bounded_f64(raw: &str, min: f64, max: f64, default: f64) -> Result<f64, ControlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| ControlError::Unparseable(raw.to_string()))?;
    if !value.is_finite() || value < min || value > max {
        return Err(ControlError::OutOfDomain(format!(
            "{} is not within {}..={}",
            value, min, max
        )));
    }
    Ok(value)
}

/// The fixed passenger input form.
#[derive(Debug, Default)]
pub struct PassengerForm;

impl PassengerForm {
    pub fn new() -> Self {
        Self
    }

    /// Prompts for the six passenger attributes and returns the collected
    /// record.
    ///
    /// Rejected lines are re-prompted until an in-domain value (or an empty
    /// line, keeping the default) is entered. Returns `Ok(None)` when the
    /// user quits with `q` or the input reaches end-of-file.
    pub fn collect<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<PassengerRecord>> {
        let Some(pclass) = prompt_field(
            input,
            output,
            &format!("Passenger Class (Pclass) {:?} [default {}]: ", PCLASS_CHOICES, PCLASS_DEFAULT),
            |raw| choice_u8(raw, &PCLASS_CHOICES, PCLASS_DEFAULT),
        )?
        else {
            return Ok(None);
        };

        let Some(sex) = prompt_field(
            input,
            output,
            &format!("Sex ({}) [default {}]: ", SEX_CHOICES.join("/"), SEX_CHOICES[0]),
            |raw| choice_label(raw, &SEX_CHOICES),
        )?
        else {
            return Ok(None);
        };

        let Some(age) = prompt_field(
            input,
            output,
            &format!("Age ({}-{}) [default {}]: ", AGE_MIN, AGE_MAX, AGE_DEFAULT),
            |raw| bounded_u8(raw, AGE_MIN, AGE_MAX, AGE_DEFAULT),
        )?
        else {
            return Ok(None);
        };

        let Some(sibsp) = prompt_field(
            input,
            output,
            &format!("Siblings/Spouses aboard (SibSp) ({}-{}) [default {}]: ", SIBSP_MIN, SIBSP_MAX, SIBSP_DEFAULT),
            |raw| bounded_u8(raw, SIBSP_MIN, SIBSP_MAX, SIBSP_DEFAULT),
        )?
        else {
            return Ok(None);
        };

        let Some(parch) = prompt_field(
            input,
            output,
            &format!("Parents/Children aboard (Parch) ({}-{}) [default {}]: ", PARCH_MIN, PARCH_MAX, PARCH_DEFAULT),
            |raw| bounded_u8(raw, PARCH_MIN, PARCH_MAX, PARCH_DEFAULT),
        )?
        else {
            return Ok(None);
        };

        let Some(fare) = prompt_field(
            input,
            output,
            &format!("Fare ({}-{}) [default {}]: ", FARE_MIN, FARE_MAX, FARE_DEFAULT),
            |raw| bounded_f64(raw, FARE_MIN, FARE_MAX, FARE_DEFAULT),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(PassengerRecord::new(
            pclass, sex, age, sibsp, parch, fare,
        )))
    }
}

fn prompt_field<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: F,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, ControlError>,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let raw = line.trim();
        if raw.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match parse(raw) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "  {}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_selects_defaults() {
        assert_eq!(choice_u8("", &PCLASS_CHOICES, PCLASS_DEFAULT).unwrap(), 3);
        assert_eq!(choice_label("", &SEX_CHOICES).unwrap(), "male");
        assert_eq!(bounded_u8("", AGE_MIN, AGE_MAX, AGE_DEFAULT).unwrap(), 25);
        assert_eq!(bounded_f64("", FARE_MIN, FARE_MAX, FARE_DEFAULT).unwrap(), 7.25);
    }

    #[test]
    fn test_domain_endpoints_accepted() {
        assert_eq!(bounded_u8("0", AGE_MIN, AGE_MAX, AGE_DEFAULT).unwrap(), 0);
        assert_eq!(bounded_u8("80", AGE_MIN, AGE_MAX, AGE_DEFAULT).unwrap(), 80);
        assert_eq!(bounded_u8("10", SIBSP_MIN, SIBSP_MAX, SIBSP_DEFAULT).unwrap(), 10);
        assert_eq!(bounded_u8("10", PARCH_MIN, PARCH_MAX, PARCH_DEFAULT).unwrap(), 10);
        assert_eq!(bounded_f64("0.0", FARE_MIN, FARE_MAX, FARE_DEFAULT).unwrap(), 0.0);
        assert_eq!(bounded_f64("600.0", FARE_MIN, FARE_MAX, FARE_DEFAULT).unwrap(), 600.0);
    }

    #[test]
    fn test_out_of_domain_rejected() {
        assert!(matches!(
            choice_u8("4", &PCLASS_CHOICES, PCLASS_DEFAULT),
            Err(ControlError::OutOfDomain(_))
        ));
        assert!(matches!(
            bounded_u8("81", AGE_MIN, AGE_MAX, AGE_DEFAULT),
            Err(ControlError::OutOfDomain(_))
        ));
        assert!(matches!(
            bounded_f64("600.01", FARE_MIN, FARE_MAX, FARE_DEFAULT),
            Err(ControlError::OutOfDomain(_))
        ));
        assert!(matches!(
            choice_label("child", &SEX_CHOICES),
            Err(ControlError::OutOfDomain(_))
        ));
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(matches!(
            bounded_u8("abc", AGE_MIN, AGE_MAX, AGE_DEFAULT),
            Err(ControlError::Unparseable(_))
        ));
        assert!(matches!(
            bounded_u8("-1", AGE_MIN, AGE_MAX, AGE_DEFAULT),
            Err(ControlError::Unparseable(_))
        ));
        assert!(matches!(
            bounded_f64("nan", FARE_MIN, FARE_MAX, FARE_DEFAULT),
            Err(ControlError::OutOfDomain(_))
        ));
    }

    #[test]
    fn test_label_choice_is_case_insensitive() {
        assert_eq!(choice_label("FEMALE", &SEX_CHOICES).unwrap(), "female");
        assert_eq!(choice_label("Male", &SEX_CHOICES).unwrap(), "male");
    }
}
