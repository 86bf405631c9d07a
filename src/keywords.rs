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

//! This module defines
//! 1) a list of constants for every keyword that can appear in a `Word`'s resolved keyword:
//!    `pub const KEYWORD: &str = "KEYWORD"`.
//! 2) an [`ALL_KEYWORDS`] array, sorted, so the tokenizer can resolve a word's keyword id with a
//!    binary search instead of a hash lookup.
//! 3) [`RESERVED_FOR_TABLE_ALIAS`] / [`RESERVED_FOR_COLUMN_ALIAS`]: the subset of keywords that
//!    can never be re-interpreted as an (unquoted) table or column alias, which is what lets
//!    `SELECT a FROM t alias` and `SELECT a alias` parse without extra lookahead.
//!
//! This is not a list of *reserved* keywords in the SQL-standard sense: most of these parse as
//! ordinary identifiers wherever the grammar does not specifically expect them, so adding a new
//! keyword here does not by itself change what parses.

/// Defines a string constant for a single keyword: `kw_def!(SELECT);` expands to
/// `pub const SELECT: &str = "SELECT";`. An explicit `= "..."` override handles keywords whose
/// surface spelling is not a valid Rust identifier (`END-EXEC`).
macro_rules! kw_def {
    ($ident:ident = $string_keyword:expr) => {
        pub const $ident: &str = $string_keyword;
    };
    ($ident:ident) => {
        kw_def!($ident = stringify!($ident));
    };
}

/// Expands to a `kw_def!` invocation per keyword, a `Keyword` enum whose variant order matches
/// `ALL_KEYWORDS`'s (sorted) order, and the `ALL_KEYWORDS`/`ALL_KEYWORDS_INDEX` parallel arrays.
macro_rules! define_keywords {
    ($($ident:ident $(= $string_keyword:expr)?),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(non_camel_case_types)]
        pub enum Keyword {
            NoKeyword,
            $($ident),*
        }

        pub const ALL_KEYWORDS_INDEX: &[Keyword] = &[
            $(Keyword::$ident),*
        ];

        $(kw_def!($ident $(= $string_keyword)?);)*

        /// Sorted (by surface spelling) so [`Keyword::from_str`] can binary search it.
        pub const ALL_KEYWORDS: &[&str] = &[
            $($ident),*
        ];
    };
}

// Keep this list sorted: `ALL_KEYWORDS`'s binary search depends on it.
define_keywords!(
    ABORT,
    ABS,
    ABSOLUTE,
    ACTION,
    ADD,
    ALL,
    ALLOCATE,
    ALTER,
    ANALYZE,
    AND,
    ANTI,
    ANY,
    APPLY,
    ARE,
    ARRAY,
    ARRAY_AGG,
    ARRAY_MAX_CARDINALITY,
    AS,
    ASC,
    ASENSITIVE,
    ASOF,
    ASYMMETRIC,
    AT,
    ATOMIC,
    ATTACH,
    AUTHORIZATION,
    AUTO_INCREMENT,
    AVG,
    BEGIN,
    BEGIN_FRAME,
    BEGIN_PARTITION,
    BERNOULLI,
    BETWEEN,
    BIGINT,
    BINARY,
    BLOB,
    BOOLEAN,
    BOTH,
    BY,
    BYTEA,
    CALL,
    CALLED,
    CARDINALITY,
    CASCADE,
    CASCADED,
    CASE,
    CAST,
    CEIL,
    CEILING,
    CHAIN,
    CHAR,
    CHARACTER,
    CHARACTER_LENGTH,
    CHAR_LENGTH,
    CHECK,
    CLOB,
    CLOSE,
    CLUSTER,
    COALESCE,
    COLLATE,
    COLLECT,
    COLUMN,
    COLUMNS,
    COMMENT,
    COMMIT,
    COMMITTED,
    CONDITION,
    CONFLICT,
    CONNECT,
    CONNECT_BY_ROOT,
    CONSTRAINT,
    CONTAINS,
    CONVERT,
    COPY,
    CORR,
    CORRESPONDING,
    COUNT,
    COVAR_POP,
    COVAR_SAMP,
    CREATE,
    CROSS,
    CSV,
    CUBE,
    CUME_DIST,
    CURRENT,
    CURRENT_CATALOG,
    CURRENT_DATE,
    CURRENT_DEFAULT_TRANSFORM_GROUP,
    CURRENT_PATH,
    CURRENT_ROLE,
    CURRENT_ROW,
    CURRENT_SCHEMA,
    CURRENT_TIME,
    CURRENT_TIMESTAMP,
    CURRENT_TRANSFORM_GROUP_FOR_TYPE,
    CURRENT_USER,
    CURSOR,
    CYCLE,
    DATE,
    DAY,
    DEALLOCATE,
    DEC,
    DECIMAL,
    DECLARE,
    DEFAULT,
    DEFINER,
    DELETE,
    DENSE_RANK,
    DEREF,
    DESC,
    DESCRIBE,
    DETACH,
    DETERMINISTIC,
    DICTIONARY,
    DISCONNECT,
    DISTINCT,
    DISTRIBUTE,
    DIV,
    DO,
    DOUBLE,
    DROP,
    DUPLICATE,
    DYNAMIC,
    EACH,
    ELEMENT,
    ELSE,
    END,
    END_EXEC = "END-EXEC",
    END_FRAME,
    END_PARTITION,
    ENGINE,
    ENUM16,
    ENUM8,
    EQUALS,
    ERROR,
    ESCAPE,
    EVERY,
    EXCEPT,
    EXEC,
    EXECUTE,
    EXISTS,
    EXP,
    EXPLAIN,
    EXTENDED,
    EXTERNAL,
    EXTRACT,
    FAIL,
    FALSE,
    FETCH,
    FIELDS,
    FILTER,
    FIRST,
    FIRST_VALUE,
    FIXEDSTRING,
    FLOAT,
    FLOAT32,
    FLOAT64,
    FLOOR,
    FOLLOWING,
    FOR,
    FOREIGN,
    FRAME_ROW,
    FREE,
    FROM,
    FULL,
    FUNCTION,
    FUSION,
    GENERATED,
    GET,
    GLOB,
    GLOBAL,
    GRANT,
    GROUP,
    GROUPING,
    GROUPS,
    HAVING,
    HEADER,
    HOLD,
    HOUR,
    IDENTITY,
    IF,
    IGNORE,
    ILIKE,
    IMMUTABLE,
    IN,
    INCREMENT,
    INDEX,
    INDICATOR,
    INNER,
    INOUT,
    INSENSITIVE,
    INSERT,
    INT,
    INT16,
    INT32,
    INT64,
    INT8,
    INTEGER,
    INTERSECT,
    INTERSECTION,
    INTERVAL,
    INTO,
    INVOKER,
    IS,
    ISNULL,
    ISOLATION,
    JOIN,
    JSONB,
    KEY,
    LAG,
    LAMBDA,
    LANGUAGE,
    LARGE,
    LAST,
    LAST_VALUE,
    LATERAL,
    LEAD,
    LEADING,
    LEFT,
    LEVEL,
    LIKE,
    LIKE_REGEX,
    LIMIT,
    LISTAGG,
    LN,
    LOCAL,
    LOCALTIME,
    LOCALTIMESTAMP,
    LOCATION,
    LOCK,
    LOGIN,
    LOWER,
    LOW_CARDINALITY,
    MAP,
    MATCH,
    MATCHED,
    MATERIALIZED,
    MAX,
    MAXVALUE,
    MEMBER,
    MERGE,
    METHOD,
    MIN,
    MINUTE,
    MINVALUE,
    MOD,
    MODIFIES,
    MODULE,
    MONTH,
    MULTISET,
    NAMESPACE,
    NATIONAL,
    NATURAL,
    NCHAR,
    NCLOB,
    NEW,
    NEXT,
    NO,
    NOCYCLE,
    NOLOCK,
    NONE,
    NORMALIZE,
    NOT,
    NOTHING,
    NOTNULL,
    NTH_VALUE,
    NTILE,
    NULL,
    NULLABLE,
    NULLIF,
    NULLS,
    NUMERIC,
    OBJECT,
    OCCURRENCES_REGEX,
    OCTET_LENGTH,
    OF,
    OFFSET,
    OLD,
    ON,
    ONLY,
    OPEN,
    OPTION,
    OR,
    ORDER,
    OUT,
    OUTER,
    OVER,
    OVERFLOW,
    OVERLAPS,
    OVERLAY,
    OVERWRITE,
    PARAMETER,
    PARQUET,
    PARTITION,
    PARTITIONED,
    PERCENT,
    PERCENTILE_CONT,
    PERCENTILE_DISC,
    PERCENT_RANK,
    PERIOD,
    PIVOT,
    PLACING,
    PORTION,
    POSITION,
    POSITION_REGEX,
    POWER,
    PRAGMA,
    PRECEDES,
    PRECEDING,
    PRECISION,
    PREPARE,
    PRIMARY,
    PRIOR,
    PRIVILEGES,
    PROCEDURE,
    PUBLIC,
    PURGE,
    QUALIFY,
    RANGE,
    RANK,
    READ,
    READS,
    REAL,
    RECURSIVE,
    REF,
    REFERENCES,
    REFERENCING,
    REGCLASS,
    REGEXP,
    REGR_AVGX,
    REGR_AVGY,
    REGR_COUNT,
    REGR_INTERCEPT,
    REGR_R2,
    REGR_SLOPE,
    REGR_SXX,
    REGR_SXY,
    REGR_SYY,
    RELATIVE,
    RELEASE,
    REPEATABLE,
    REPLACE,
    REPLICATION,
    RESPECT,
    RESTRICT,
    RESULT,
    RETURN,
    RETURNING,
    RETURNS,
    REVOKE,
    RIGHT,
    RLIKE,
    ROLE,
    ROLLBACK,
    ROLLUP,
    ROW,
    ROWS,
    ROW_NUMBER,
    SAFE_CAST,
    SAMPLE,
    SAVEPOINT,
    SCHEMA,
    SCOPE,
    SCROLL,
    SEARCH,
    SECOND,
    SECURITY,
    SELECT,
    SEMI,
    SENSITIVE,
    SEQUENCE,
    SEQUENCES,
    SERIALIZABLE,
    SESSION,
    SESSION_USER,
    SET,
    SHARE,
    SHOW,
    SIBLINGS,
    SIMILAR,
    SMALLINT,
    SOME,
    SORT,
    SOURCE,
    SPECIFIC,
    SPECIFICTYPE,
    SQL,
    SQLEXCEPTION,
    SQLSTATE,
    SQLWARNING,
    SQRT,
    STABLE,
    START,
    START_WITH,
    STATIC,
    STDDEV_POP,
    STDDEV_SAMP,
    STDIN,
    STDOUT,
    STORED,
    STRICT,
    STRUCT,
    SUBMULTISET,
    SUBSTRING,
    SUBSTRING_REGEX,
    SUCCEEDS,
    SUM,
    SUPER,
    SUPERUSER,
    SYMMETRIC,
    SYSTEM,
    SYSTEM_TIME,
    SYSTEM_USER,
    TABLE,
    TABLES,
    TABLESAMPLE,
    TARGET,
    TBLPROPERTIES,
    TEMP,
    TEMPORARY,
    TEXT,
    THEN,
    TIES,
    TIME,
    TIMESTAMP,
    TIMEZONE_HOUR,
    TIMEZONE_MINUTE,
    TO,
    TOP,
    TRAILING,
    TRANSACTION,
    TRANSLATE,
    TRANSLATE_REGEX,
    TRANSLATION,
    TREAT,
    TRIGGER,
    TRIM,
    TRIM_ARRAY,
    TRUE,
    TRUNCATE,
    TRY_CAST,
    UESCAPE,
    UINT16,
    UINT32,
    UINT64,
    UINT8,
    UNBOUNDED,
    UNCOMMITTED,
    UNION,
    UNIQUE,
    UNKNOWN,
    UNLOGGED,
    UNNEST,
    UNPIVOT,
    UNSIGNED,
    UPDATE,
    UPPER,
    USAGE,
    USE,
    USER,
    USING,
    UUID,
    VALUE,
    VALUES,
    VALUE_OF,
    VARBINARY,
    VARCHAR,
    VARIANT,
    VARYING,
    VAR_POP,
    VAR_SAMP,
    VERBOSE,
    VERSIONING,
    VIEW,
    VIRTUAL,
    VOLATILE,
    WHEN,
    WHENEVER,
    WHERE,
    WIDTH_BUCKET,
    WINDOW,
    WITH,
    WITHIN,
    WITHOUT,
    WORK,
    WRITE,
    XOR,
    YEAR,
    ZEROFILL,
    ZONE,
);

impl Keyword {
    /// Resolves a (already-uppercased) word into its keyword id, if any.
    pub fn from_str(word: &str) -> Option<Keyword> {
        ALL_KEYWORDS
            .binary_search(&word)
            .map(|index| ALL_KEYWORDS_INDEX[index])
            .ok()
    }

    pub fn as_str(&self) -> &'static str {
        if matches!(self, Keyword::NoKeyword) {
            return "";
        }
        let index = ALL_KEYWORDS_INDEX
            .iter()
            .position(|k| k == self)
            .expect("every non-NoKeyword variant appears in ALL_KEYWORDS_INDEX");
        ALL_KEYWORDS[index]
    }
}

/// Cannot be used as a table alias, so that `FROM table_name alias` parses unambiguously
/// without extra lookahead.
pub const RESERVED_FOR_TABLE_ALIAS: &[Keyword] = &[
    // Reserved as both a table and a column alias:
    Keyword::WITH,
    Keyword::SELECT,
    Keyword::WHERE,
    Keyword::GROUP,
    Keyword::HAVING,
    Keyword::ORDER,
    Keyword::TOP,
    Keyword::LIMIT,
    Keyword::OFFSET,
    Keyword::FETCH,
    Keyword::UNION,
    Keyword::EXCEPT,
    Keyword::INTERSECT,
    // Reserved only as a table alias in FROM/JOIN:
    Keyword::ON,
    Keyword::JOIN,
    Keyword::INNER,
    Keyword::CROSS,
    Keyword::FULL,
    Keyword::LEFT,
    Keyword::RIGHT,
    Keyword::NATURAL,
    Keyword::USING,
    Keyword::OUTER,
];

/// Cannot be used as a column alias, so that `SELECT <expr> alias` parses unambiguously.
pub const RESERVED_FOR_COLUMN_ALIAS: &[Keyword] = &[
    Keyword::WITH,
    Keyword::SELECT,
    Keyword::WHERE,
    Keyword::GROUP,
    Keyword::HAVING,
    Keyword::ORDER,
    Keyword::LIMIT,
    Keyword::OFFSET,
    Keyword::FETCH,
    Keyword::UNION,
    Keyword::EXCEPT,
    Keyword::INTERSECT,
    Keyword::FROM,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keywords_is_sorted() {
        let mut sorted = ALL_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(ALL_KEYWORDS, sorted.as_slice());
    }

    #[test]
    fn round_trips_select() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::SELECT));
        assert_eq!(Keyword::SELECT.as_str(), "SELECT");
    }

    #[test]
    fn unknown_word_has_no_keyword() {
        assert_eq!(Keyword::from_str("MY_COLUMN_NAME"), None);
    }
}
