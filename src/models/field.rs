//! Field → tag tables and the value rendering rule.

use std::fmt;

use rust_decimal::Decimal;

/// Where a field is emitted in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// Emitted inside the record's own entry.
    Row,
    /// Emitted once, in the `Организация` block.
    Organization,
    /// Emitted in the employee entry (`УТ2:ФИО`, `УТ2:СНИЛС`, `ОбщийСтаж`).
    Employee,
    /// Read from the sheet but never emitted.
    Identity,
}

/// One column of a record type: its name, output tag, scope and accessor.
///
/// A record type's table lists its columns in worksheet order, so the
/// position of an entry is also the column it is read from.
pub struct FieldSpec<R> {
    /// Field identifier, used in error messages.
    pub name: &'static str,
    /// XML element name.
    pub tag: &'static str,
    /// Where the field is emitted.
    pub scope: FieldScope,
    /// Reads the field's value from a record.
    pub value: fn(&R) -> XmlValue,
}

impl<R> FieldSpec<R> {
    /// Declares a column.
    pub const fn new(
        name: &'static str,
        tag: &'static str,
        scope: FieldScope,
        value: fn(&R) -> XmlValue,
    ) -> Self {
        Self {
            name,
            tag,
            scope,
            value,
        }
    }

    /// Declares a column emitted inside the record's own entry.
    pub const fn row(name: &'static str, tag: &'static str, value: fn(&R) -> XmlValue) -> Self {
        Self::new(name, tag, FieldScope::Row, value)
    }
}

/// A field value ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    /// Rendered unchanged.
    Text(String),
    /// Rendered as plain decimal digits.
    Int(i64),
    /// Rendered with exactly two decimal places.
    Amount(Decimal),
}

impl fmt::Display for XmlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlValue::Text(text) => f.write_str(text),
            XmlValue::Int(value) => write!(f, "{value}"),
            XmlValue::Amount(amount) => {
                let rounded = amount.round_dp(2);
                let rounded = if rounded.is_zero() {
                    Decimal::ZERO
                } else {
                    rounded
                };
                write!(f, "{rounded:.2}")
            }
        }
    }
}

impl From<&str> for XmlValue {
    fn from(value: &str) -> Self {
        XmlValue::Text(value.to_string())
    }
}

impl From<i64> for XmlValue {
    fn from(value: i64) -> Self {
        XmlValue::Int(value)
    }
}

impl From<Decimal> for XmlValue {
    fn from(value: Decimal) -> Self {
        XmlValue::Amount(value)
    }
}

/// Renders a value the way the report expects it.
///
/// Text passes through, integers render as plain digits and amounts are
/// rounded half-to-even to exactly two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sizp_report::models::{XmlValue, display_value};
///
/// assert_eq!(display_value(&XmlValue::Int(600)), "600");
/// assert_eq!(display_value(&XmlValue::Amount(Decimal::new(15, 1))), "1.50");
/// assert_eq!(display_value(&XmlValue::Text("Врач".into())), "Врач");
/// ```
pub fn display_value(value: &XmlValue) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn amount(s: &str) -> String {
        display_value(&XmlValue::Amount(Decimal::from_str(s).unwrap()))
    }

    #[test]
    fn test_amount_is_padded_to_two_places() {
        assert_eq!(amount("0"), "0.00");
        assert_eq!(amount("12"), "12.00");
        assert_eq!(amount("12.5"), "12.50");
    }

    #[test]
    fn test_amount_is_rounded_to_two_places() {
        assert_eq!(amount("1.239"), "1.24");
        assert_eq!(amount("1.231"), "1.23");
        assert_eq!(amount("0.125"), "0.12");
    }

    #[test]
    fn test_tiny_negative_amount_renders_as_zero() {
        assert_eq!(amount("-0.001"), "0.00");
    }

    #[test]
    fn test_int_has_no_decimal_point() {
        assert_eq!(display_value(&XmlValue::Int(2021)), "2021");
        assert_eq!(display_value(&XmlValue::Int(-3)), "-3");
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(display_value(&XmlValue::from("05.10")), "05.10");
    }

    proptest! {
        #[test]
        fn prop_amount_has_exactly_two_decimals(mantissa in -1_000_000_000i64..1_000_000_000, scale in 0u32..6) {
            let rendered = display_value(&XmlValue::Amount(Decimal::new(mantissa, scale)));
            let (_, fraction) = rendered.split_once('.').expect("decimal point");
            prop_assert_eq!(fraction.len(), 2);
            prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn prop_int_renders_exact_digits(value in any::<i64>()) {
            let rendered = display_value(&XmlValue::Int(value));
            prop_assert!(!rendered.contains('.'));
            prop_assert_eq!(rendered.parse::<i64>().unwrap(), value);
        }
    }
}
