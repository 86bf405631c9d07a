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

//! The thirteen named preset capability vectors from spec.md §6's dialect
//! menu. Each overrides only the [`Dialect`] methods where it disagrees
//! with the generic baseline, mirroring the real per-dialect files in the
//! wider `sqlparser-rs` corpus (see `examples/other_examples/..mysql.rs.rs`).

use super::Dialect;
use crate::keywords::Keyword;

/// The permissive baseline: accepts most dialect-specific syntax so callers
/// that don't care about strict validation can parse a wide variety of SQL.
#[derive(Debug, Default)]
pub struct GenericDialect {}

impl Dialect for GenericDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '#' || ch == '@'
    }
    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }
    fn supports_within_after_array_aggregation(&self) -> bool {
        true
    }
    fn supports_window_function_null_treatment_arg(&self) -> bool {
        true
    }
    fn supports_group_by_expr(&self) -> bool {
        true
    }
    fn supports_numeric_prefix(&self) -> bool {
        true
    }
    fn supports_lambda_functions(&self) -> bool {
        true
    }
    fn supports_trailing_commas(&self) -> bool {
        true
    }
    fn supports_select_wildcard_except(&self) -> bool {
        true
    }
    fn supports_string_literal_backslash_escape(&self) -> bool {
        true
    }
}

/// The strict ANSI/ISO SQL baseline: no dialect-specific extensions.
#[derive(Debug, Default)]
pub struct AnsiDialect {}

impl Dialect for AnsiDialect {}

#[derive(Debug, Default)]
pub struct PostgreSqlDialect {}

impl Dialect for PostgreSqlDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }
    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }
    fn supports_within_after_array_aggregation(&self) -> bool {
        true
    }
    fn supports_window_function_null_treatment_arg(&self) -> bool {
        true
    }
    fn supports_group_by_expr(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct MySqlDialect {}

const RESERVED_FOR_TABLE_ALIAS_MYSQL: &[Keyword] = &[Keyword::USE, Keyword::FORCE];

impl Dialect for MySqlDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '$' || ('\u{0080}'..='\u{ffff}').contains(&ch)
    }
    fn is_identifier_part(&self, ch: char) -> bool {
        self.is_identifier_start(ch) || ch.is_ascii_digit()
    }
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }
    fn identifier_quote_style(&self, _identifier: &str) -> Option<char> {
        Some('`')
    }
    fn supports_string_literal_backslash_escape(&self) -> bool {
        true
    }
    fn supports_numeric_prefix(&self) -> bool {
        true
    }
    fn requires_single_line_comment_whitespace(&self) -> bool {
        true
    }
    fn additional_reserved_for_table_alias(&self) -> &'static [Keyword] {
        RESERVED_FOR_TABLE_ALIAS_MYSQL
    }
}

#[derive(Debug, Default)]
pub struct SqliteDialect {}

impl Dialect for SqliteDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '`' || ch == '['
    }
    fn supports_trailing_commas(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
pub struct MsSqlDialect {}

impl Dialect for MsSqlDialect {
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '['
    }
    fn identifier_quote_style(&self, _identifier: &str) -> Option<char> {
        Some('[')
    }
    fn supports_bracket_quoted_identifiers(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct SnowflakeDialect {}

impl Dialect for SnowflakeDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }
    fn supports_connect_by(&self) -> bool {
        true
    }
    fn supports_lambda_functions(&self) -> bool {
        true
    }
    fn supports_trailing_commas(&self) -> bool {
        true
    }
    fn allows_unquoted_ident_dash(&self) -> bool {
        true
    }
    fn supports_window_function_null_treatment_arg(&self) -> bool {
        true
    }
    fn supports_asof_join(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct BigQueryDialect {}

impl Dialect for BigQueryDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn supports_group_by_expr(&self) -> bool {
        true
    }
    fn supports_select_wildcard_except(&self) -> bool {
        true
    }
    fn supports_trailing_commas(&self) -> bool {
        true
    }
    fn allows_unquoted_ident_dash(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct RedshiftDialect {}

impl Dialect for RedshiftDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }
    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct HiveDialect {}

impl Dialect for HiveDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == ':'
    }
    fn supports_string_literal_backslash_escape(&self) -> bool {
        true
    }
    fn supports_trailing_commas(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct ClickHouseDialect {}

impl Dialect for ClickHouseDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn supports_dictionary_syntax(&self) -> bool {
        true
    }
    fn supports_numeric_prefix(&self) -> bool {
        true
    }
    fn supports_asof_join(&self) -> bool {
        true
    }
    fn supports_trailing_commas(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct DuckDbDialect {}

impl Dialect for DuckDbDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn supports_lambda_functions(&self) -> bool {
        true
    }
    fn supports_trailing_commas(&self) -> bool {
        true
    }
    fn supports_select_wildcard_except(&self) -> bool {
        true
    }
    fn supports_asof_join(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct DatabricksDialect {}

impl Dialect for DatabricksDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }
    fn supports_lambda_functions(&self) -> bool {
        true
    }
    fn supports_trailing_commas(&self) -> bool {
        true
    }
    fn supports_group_by_expr(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::dialect_from_str;

    #[test]
    fn recognizes_every_menu_entry() {
        for name in [
            "generic",
            "ansi",
            "postgresql",
            "mysql",
            "sqlite",
            "mssql",
            "snowflake",
            "bigquery",
            "redshift",
            "hive",
            "clickhouse",
            "duckdb",
            "databricks",
        ] {
            assert!(dialect_from_str(name).is_some(), "missing dialect {name}");
        }
    }

    #[test]
    fn unknown_dialect_is_none() {
        assert!(dialect_from_str("not-a-real-dialect").is_none());
    }

    #[test]
    fn mysql_uses_backtick_quoting() {
        let d = super::MySqlDialect {};
        assert!(Dialect::is_delimited_identifier_start(&d, '`'));
    }

    use super::Dialect;
}
