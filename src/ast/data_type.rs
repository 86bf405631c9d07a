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

//! One variant per SQL type form (spec.md §3 `DataType`), including the
//! dialect-specific forms named explicitly in spec.md: `FixedString`,
//! `LowCardinality`, `Nullable`, `Enum`, `Uuid`, `Bytea`, `JsonB`, `Regclass`.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::helpers::display_comma_separated;
use crate::ast::ObjectName;
use crate::dialect::{Dialect, DialectDisplay};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CharLengthUnit {
    Characters,
    Octets,
}

impl DialectDisplay for CharLengthUnit {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        f.write_str(match self {
            CharLengthUnit::Characters => "CHARACTERS",
            CharLengthUnit::Octets => "OCTETS",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharacterLength {
    pub length: u64,
    pub unit: Option<CharLengthUnit>,
}

impl DialectDisplay for CharacterLength {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        write!(f, "{}", self.length)?;
        if let Some(unit) = &self.unit {
            write!(f, " ")?;
            unit.fmt(f, dialect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimezoneInfo {
    /// No explicit `WITH`/`WITHOUT TIME ZONE` clause.
    None,
    /// `WITH TIME ZONE`
    WithTimeZone,
    /// `WITHOUT TIME ZONE`
    WithoutTimeZone,
    /// MySQL/Snowflake-ish `TIMESTAMPTZ`-as-keyword spelling.
    Tz,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    Boolean,
    TinyInt(Option<u64>),
    UnsignedTinyInt(Option<u64>),
    SmallInt(Option<u64>),
    UnsignedSmallInt(Option<u64>),
    Int(Option<u64>),
    Integer(Option<u64>),
    UnsignedInt(Option<u64>),
    UnsignedInteger(Option<u64>),
    BigInt(Option<u64>),
    UnsignedBigInt(Option<u64>),
    Float(Option<u64>),
    Real,
    Double,
    DoublePrecision,
    Decimal(Option<(u64, Option<u64>)>),
    Numeric(Option<(u64, Option<u64>)>),
    Char(Option<CharacterLength>),
    Varchar(Option<CharacterLength>),
    Nvarchar(Option<u64>),
    Text,
    MediumText,
    LongText,
    String(Option<u64>),
    Bytea,
    Binary(Option<u64>),
    Varbinary(Option<u64>),
    Blob(Option<u64>),
    Date,
    Time(Option<u64>, TimezoneInfo),
    Datetime(Option<u64>),
    Timestamp(Option<u64>, TimezoneInfo),
    Interval,
    JSON,
    JsonB,
    Regclass,
    Uuid,
    Array(Option<Box<DataType>>),
    /// ClickHouse `Nullable(T)`.
    Nullable(Box<DataType>),
    /// ClickHouse `LowCardinality(T)`.
    LowCardinality(Box<DataType>),
    /// ClickHouse `FixedString(N)`.
    FixedString(u64),
    /// `ENUM('a', 'b', ...)`, optionally with explicit numeric values.
    Enum(Vec<(String, Option<i64>)>),
    /// `STRUCT<field: TYPE, ...>` (BigQuery/DuckDB-shaped).
    Struct(Vec<StructField>),
    /// `MAP<K, V>`
    Map(Box<DataType>, Box<DataType>),
    /// A user-defined or otherwise unmodeled named type, e.g. `geography`.
    Custom(ObjectName, Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructField {
    pub name: Option<String>,
    pub data_type: DataType,
}

impl DialectDisplay for StructField {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        self.data_type.fmt(f, dialect)
    }
}

fn fmt_len(f: &mut dyn fmt::Write, name: &str, len: Option<u64>) -> fmt::Result {
    match len {
        Some(len) => write!(f, "{name}({len})"),
        None => write!(f, "{name}"),
    }
}

fn fmt_exact(f: &mut dyn fmt::Write, name: &str, ex: Option<(u64, Option<u64>)>) -> fmt::Result {
    match ex {
        Some((p, Some(s))) => write!(f, "{name}({p}, {s})"),
        Some((p, None)) => write!(f, "{name}({p})"),
        None => write!(f, "{name}"),
    }
}

impl DialectDisplay for DataType {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        match self {
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::TinyInt(l) => fmt_len(f, "TINYINT", *l),
            DataType::UnsignedTinyInt(l) => {
                fmt_len(f, "TINYINT", *l)?;
                write!(f, " UNSIGNED")
            }
            DataType::SmallInt(l) => fmt_len(f, "SMALLINT", *l),
            DataType::UnsignedSmallInt(l) => {
                fmt_len(f, "SMALLINT", *l)?;
                write!(f, " UNSIGNED")
            }
            DataType::Int(l) => fmt_len(f, "INT", *l),
            DataType::Integer(l) => fmt_len(f, "INTEGER", *l),
            DataType::UnsignedInt(l) => {
                fmt_len(f, "INT", *l)?;
                write!(f, " UNSIGNED")
            }
            DataType::UnsignedInteger(l) => {
                fmt_len(f, "INTEGER", *l)?;
                write!(f, " UNSIGNED")
            }
            DataType::BigInt(l) => fmt_len(f, "BIGINT", *l),
            DataType::UnsignedBigInt(l) => {
                fmt_len(f, "BIGINT", *l)?;
                write!(f, " UNSIGNED")
            }
            DataType::Float(l) => fmt_len(f, "FLOAT", *l),
            DataType::Real => write!(f, "REAL"),
            DataType::Double => write!(f, "DOUBLE"),
            DataType::DoublePrecision => write!(f, "DOUBLE PRECISION"),
            DataType::Decimal(e) => fmt_exact(f, "DECIMAL", *e),
            DataType::Numeric(e) => fmt_exact(f, "NUMERIC", *e),
            DataType::Char(l) => match l {
                Some(l) => {
                    write!(f, "CHAR(")?;
                    l.fmt(f, dialect)?;
                    write!(f, ")")
                }
                None => write!(f, "CHAR"),
            },
            DataType::Varchar(l) => match l {
                Some(l) => {
                    write!(f, "VARCHAR(")?;
                    l.fmt(f, dialect)?;
                    write!(f, ")")
                }
                None => write!(f, "VARCHAR"),
            },
            DataType::Nvarchar(l) => fmt_len(f, "NVARCHAR", *l),
            DataType::Text => write!(f, "TEXT"),
            DataType::MediumText => write!(f, "MEDIUMTEXT"),
            DataType::LongText => write!(f, "LONGTEXT"),
            DataType::String(l) => fmt_len(f, "STRING", *l),
            DataType::Bytea => write!(f, "BYTEA"),
            DataType::Binary(l) => fmt_len(f, "BINARY", *l),
            DataType::Varbinary(l) => fmt_len(f, "VARBINARY", *l),
            DataType::Blob(l) => fmt_len(f, "BLOB", *l),
            DataType::Date => write!(f, "DATE"),
            DataType::Time(l, tz) => {
                fmt_len(f, "TIME", *l)?;
                fmt_timezone(f, tz)
            }
            DataType::Datetime(l) => fmt_len(f, "DATETIME", *l),
            DataType::Timestamp(l, tz) => {
                fmt_len(f, "TIMESTAMP", *l)?;
                fmt_timezone(f, tz)
            }
            DataType::Interval => write!(f, "INTERVAL"),
            DataType::JSON => write!(f, "JSON"),
            DataType::JsonB => write!(f, "JSONB"),
            DataType::Regclass => write!(f, "REGCLASS"),
            DataType::Uuid => write!(f, "UUID"),
            DataType::Array(Some(inner)) => {
                write!(f, "ARRAY(")?;
                inner.fmt(f, dialect)?;
                write!(f, ")")
            }
            DataType::Array(None) => write!(f, "ARRAY"),
            DataType::Nullable(inner) => {
                write!(f, "Nullable(")?;
                inner.fmt(f, dialect)?;
                write!(f, ")")
            }
            DataType::LowCardinality(inner) => {
                write!(f, "LowCardinality(")?;
                inner.fmt(f, dialect)?;
                write!(f, ")")
            }
            DataType::FixedString(n) => write!(f, "FixedString({n})"),
            DataType::Enum(values) => {
                write!(f, "ENUM(")?;
                let mut delim = "";
                for (name, value) in values {
                    write!(f, "{delim}'{name}'")?;
                    delim = ", ";
                    if let Some(value) = value {
                        write!(f, " = {value}")?;
                    }
                }
                write!(f, ")")
            }
            DataType::Struct(fields) => {
                write!(f, "STRUCT<")?;
                display_comma_separated(fields).fmt(f, dialect)?;
                write!(f, ">")
            }
            DataType::Map(k, v) => {
                write!(f, "MAP<")?;
                k.fmt(f, dialect)?;
                write!(f, ", ")?;
                v.fmt(f, dialect)?;
                write!(f, ">")
            }
            DataType::Custom(name, modifiers) => {
                name.fmt(f, dialect)?;
                if !modifiers.is_empty() {
                    write!(f, "({})", modifiers.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

fn fmt_timezone(f: &mut dyn fmt::Write, tz: &TimezoneInfo) -> fmt::Result {
    match tz {
        TimezoneInfo::None => Ok(()),
        TimezoneInfo::WithTimeZone => write!(f, " WITH TIME ZONE"),
        TimezoneInfo::WithoutTimeZone => write!(f, " WITHOUT TIME ZONE"),
        TimezoneInfo::Tz => write!(f, "TZ"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn varchar_with_length() {
        let dialect = GenericDialect {};
        let dt = DataType::Varchar(Some(CharacterLength {
            length: 10,
            unit: None,
        }));
        assert_eq!(dt.sql(&dialect).unwrap(), "VARCHAR(10)");
    }

    #[test]
    fn decimal_with_precision_and_scale() {
        let dialect = GenericDialect {};
        let dt = DataType::Decimal(Some((10, Some(2))));
        assert_eq!(dt.sql(&dialect).unwrap(), "DECIMAL(10, 2)");
    }

    #[test]
    fn clickhouse_nested_types() {
        let dialect = GenericDialect {};
        let dt = DataType::Nullable(Box::new(DataType::LowCardinality(Box::new(
            DataType::FixedString(16),
        ))));
        assert_eq!(dt.sql(&dialect).unwrap(), "Nullable(LowCardinality(FixedString(16)))");
    }
}
