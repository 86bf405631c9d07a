// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use core::fmt;

#[cfg(feature = "bigdecimal")]
use bigdecimal::BigDecimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;
use crate::dialect::{Dialect, DialectDisplay};

/// Primitive SQL values: numbers, the various string-quoting forms, and the
/// keyword literals (`NULL`, `TRUE`/`FALSE`, placeholders).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Numeric literal; the trailing `bool` records a `L`/long-integer
    /// suffix some dialects accept (e.g. BigQuery's `123L`).
    #[cfg(not(feature = "bigdecimal"))]
    Number(String, bool),
    #[cfg(feature = "bigdecimal")]
    Number(BigDecimal, bool),
    /// `'string value'`
    SingleQuotedString(String),
    /// `E'string value'` (Postgres backslash-escaped string extension)
    EscapedStringLiteral(String),
    /// `N'string value'`
    NationalStringLiteral(String),
    /// `X'hex value'`
    HexStringLiteral(String),
    DoubleQuotedString(String),
    Boolean(bool),
    /// `INTERVAL '<value>' [<leading_field> [(<leading_precision>)]]
    /// [TO <last_field> [(<fractional_seconds_precision>)]]`.
    ///
    /// The parser does not validate that `leading_field`'s unit is coarser
    /// than `last_field`'s, so `HOUR TO YEAR` round-trips unchanged.
    Interval {
        value: Box<Expr>,
        leading_field: Option<DateTimeField>,
        leading_precision: Option<u64>,
        last_field: Option<DateTimeField>,
        fractional_seconds_precision: Option<u64>,
    },
    Null,
    /// `?`, `$1`, `:name` -- the literal placeholder text, dialect-spelled.
    Placeholder(String),
}

impl Value {
    #[cfg(not(feature = "bigdecimal"))]
    pub fn number(s: impl Into<String>) -> Value {
        Value::Number(s.into(), false)
    }

    #[cfg(feature = "bigdecimal")]
    pub fn number(s: impl AsRef<str>) -> Value {
        Value::Number(s.as_ref().parse().expect("valid decimal literal"), false)
    }
}

impl DialectDisplay for Value {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            Value::Number(v, long) => write!(f, "{v}{}", if *long { "L" } else { "" }),
            Value::DoubleQuotedString(v) => write!(f, "\"{v}\""),
            Value::SingleQuotedString(v) => {
                write!(f, "'")?;
                escape_single_quote_string(v).fmt(f, dialect)?;
                write!(f, "'")
            }
            Value::EscapedStringLiteral(v) => {
                write!(f, "E'")?;
                escape_escaped_string(v).fmt(f, dialect)?;
                write!(f, "'")
            }
            Value::NationalStringLiteral(v) => write!(f, "N'{v}'"),
            Value::HexStringLiteral(v) => write!(f, "X'{v}'"),
            Value::Boolean(v) => write!(f, "{}", if *v { "true" } else { "false" }),
            Value::Interval {
                value,
                leading_field: Some(DateTimeField::Second),
                leading_precision: Some(leading_precision),
                last_field: None,
                fractional_seconds_precision: Some(fractional_seconds_precision),
            } => {
                write!(f, "INTERVAL ")?;
                value.fmt(f, dialect)?;
                write!(f, " SECOND ({leading_precision}, {fractional_seconds_precision})")
            }
            Value::Interval {
                value,
                leading_field,
                leading_precision,
                last_field,
                fractional_seconds_precision,
            } => {
                write!(f, "INTERVAL ")?;
                value.fmt(f, dialect)?;
                if let Some(leading_field) = leading_field {
                    write!(f, " ")?;
                    leading_field.fmt(f, dialect)?;
                }
                if let Some(leading_precision) = leading_precision {
                    write!(f, " ({leading_precision})")?;
                }
                if let Some(last_field) = last_field {
                    write!(f, " TO ")?;
                    last_field.fmt(f, dialect)?;
                }
                if let Some(fractional_seconds_precision) = fractional_seconds_precision {
                    write!(f, " ({fractional_seconds_precision})")?;
                }
                Ok(())
            }
            Value::Null => write!(f, "NULL"),
            Value::Placeholder(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateTimeField {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Century,
    Decade,
    Dow,
    Doy,
    Epoch,
    Isodow,
    Isoyear,
    Julian,
    Microseconds,
    Millenium,
    Milliseconds,
    Quarter,
    Timezone,
    TimezoneHour,
    TimezoneMinute,
}

impl DialectDisplay for DateTimeField {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            DateTimeField::Year => "YEAR",
            DateTimeField::Month => "MONTH",
            DateTimeField::Week => "WEEK",
            DateTimeField::Day => "DAY",
            DateTimeField::Hour => "HOUR",
            DateTimeField::Minute => "MINUTE",
            DateTimeField::Second => "SECOND",
            DateTimeField::Century => "CENTURY",
            DateTimeField::Decade => "DECADE",
            DateTimeField::Dow => "DOW",
            DateTimeField::Doy => "DOY",
            DateTimeField::Epoch => "EPOCH",
            DateTimeField::Isodow => "ISODOW",
            DateTimeField::Isoyear => "ISOYEAR",
            DateTimeField::Julian => "JULIAN",
            DateTimeField::Microseconds => "MICROSECONDS",
            DateTimeField::Millenium => "MILLENIUM",
            DateTimeField::Milliseconds => "MILLISECONDS",
            DateTimeField::Quarter => "QUARTER",
            DateTimeField::Timezone => "TIMEZONE",
            DateTimeField::TimezoneHour => "TIMEZONE_HOUR",
            DateTimeField::TimezoneMinute => "TIMEZONE_MINUTE",
        })
    }
}

pub struct EscapeQuotedString<'a> {
    string: &'a str,
    quote: char,
}

impl<'a> DialectDisplay for EscapeQuotedString<'a> {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        for c in self.string.chars() {
            if c == self.quote {
                write!(f, "{q}{q}", q = self.quote)?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

pub fn escape_quoted_string(string: &str, quote: char) -> EscapeQuotedString<'_> {
    EscapeQuotedString { string, quote }
}

pub fn escape_single_quote_string(s: &str) -> EscapeQuotedString<'_> {
    escape_quoted_string(s, '\'')
}

pub struct EscapeEscapedStringLiteral<'a>(&'a str);

impl<'a> DialectDisplay for EscapeEscapedStringLiteral<'a> {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\'' => write!(f, r#"\'"#)?,
                '\\' => write!(f, r#"\\"#)?,
                '\n' => write!(f, r#"\n"#)?,
                '\t' => write!(f, r#"\t"#)?,
                '\r' => write!(f, r#"\r"#)?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

pub fn escape_escaped_string(s: &str) -> EscapeEscapedStringLiteral<'_> {
    EscapeEscapedStringLiteral(s)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrimWhereField {
    Both,
    Leading,
    Trailing,
}

impl DialectDisplay for TrimWhereField {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        use TrimWhereField::*;
        f.write_str(match self {
            Both => "BOTH",
            Leading => "LEADING",
            Trailing => "TRAILING",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn single_quote_is_doubled_on_escape() {
        let dialect = GenericDialect {};
        let v = Value::SingleQuotedString("it's".into());
        assert_eq!(v.sql(&dialect).unwrap(), "'it''s'");
    }

    #[test]
    fn escaped_string_literal_escapes_backslash_and_newline() {
        let dialect = GenericDialect {};
        let v = Value::EscapedStringLiteral("a\\b\nc".into());
        assert_eq!(v.sql(&dialect).unwrap(), "E'a\\\\b\\nc'");
    }

    #[test]
    fn long_number_suffix_round_trips() {
        let dialect = GenericDialect {};
        let v = Value::Number("123".into(), true);
        assert_eq!(v.sql(&dialect).unwrap(), "123L");
    }
}
