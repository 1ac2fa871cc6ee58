//! Typed parsing of raw query-string values.
//!
//! Each supported target type registers itself by implementing
//! [`ParseParam`]; dispatch is by the field's declared type, never by
//! inspecting the value. The non-nullable/nullable asymmetry of the binder
//! is deliberate and load-bearing: scalar types swallow parse failures and
//! fall back to their zero value, while `Option` targets yield `None`:
//! `i32::parse_param("")` is `Ok(0)` but `Option::<i32>::parse_param("")` is
//! `Ok(None)`. Enum parsing is the one place a bad value is an error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::ParseError;
use crate::fields::FilterEnum;
use crate::models::SortDirection;

/// A type that can be produced from a single raw query-string value.
pub trait ParseParam: Sized {
    fn parse_param(raw: &str) -> Result<Self, ParseError>;
}

/// Binds an optional raw value: absent keys reset the field to its default
/// (`None` for options, empty for collections).
pub fn bind_value<T: ParseParam + Default>(raw: Option<&str>) -> Result<T, ParseError> {
    raw.map_or_else(|| Ok(T::default()), T::parse_param)
}

fn parse_bool(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(value);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

macro_rules! parse_with_default {
    ($type:ty, $parse:expr) => {
        impl ParseParam for $type {
            fn parse_param(raw: &str) -> Result<Self, ParseError> {
                Ok($parse(raw).unwrap_or_default())
            }
        }

        impl ParseParam for Option<$type> {
            fn parse_param(raw: &str) -> Result<Self, ParseError> {
                Ok($parse(raw))
            }
        }
    };
}

parse_with_default!(i32, |raw: &str| raw.trim().parse::<i32>().ok());
parse_with_default!(f64, |raw: &str| raw.trim().parse::<f64>().ok());
parse_with_default!(Decimal, |raw: &str| raw.trim().parse::<Decimal>().ok());
parse_with_default!(bool, parse_bool);
parse_with_default!(Uuid, |raw: &str| Uuid::parse_str(raw.trim()).ok());
parse_with_default!(NaiveDateTime, parse_datetime);

impl ParseParam for String {
    fn parse_param(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_string())
    }
}

impl ParseParam for Option<String> {
    fn parse_param(raw: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            Ok(None)
        } else {
            Ok(Some(raw.to_string()))
        }
    }
}

impl ParseParam for SortDirection {
    fn parse_param(raw: &str) -> Result<Self, ParseError> {
        <Self as FilterEnum>::parse(raw)
    }
}

impl<T: FilterEnum> ParseParam for Option<T> {
    fn parse_param(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            Ok(None)
        } else {
            T::parse(raw).map(Some)
        }
    }
}

impl<T: FilterEnum> ParseParam for Vec<T> {
    fn parse_param(raw: &str) -> Result<Self, ParseError> {
        raw.split(',').map(T::parse).collect()
    }
}

impl<T: FilterEnum> ParseParam for Vec<(T, String)> {
    fn parse_param(raw: &str) -> Result<Self, ParseError> {
        raw.split(',')
            .map(|part| T::parse(part).map(|value| (value, String::new())))
            .collect()
    }
}
