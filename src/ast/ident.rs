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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::helpers::display_separated;
use crate::dialect::{Dialect, DialectDisplay};

/// An identifier, possibly quoted. Two `Ident`s with the same `value` but a
/// different `quote_style` are distinct values (spec.md §3 invariant).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ident {
    pub value: String,
    pub quote_style: Option<char>,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Ident {
            value: value.into(),
            quote_style: None,
        }
    }

    pub fn with_quote(quote: char, value: impl Into<String>) -> Self {
        Ident {
            value: value.into(),
            quote_style: Some(quote),
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::new(value)
    }
}

impl DialectDisplay for Ident {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        match self.quote_style {
            Some(q) if q == '[' => write!(f, "[{}]", self.value),
            Some(q) => {
                write!(f, "{q}")?;
                for c in self.value.chars() {
                    if c == q {
                        write!(f, "{q}{q}")?;
                    } else {
                        write!(f, "{c}")?;
                    }
                }
                write!(f, "{q}")
            }
            None => write!(f, "{}", self.value),
        }
    }
}

/// A (possibly multi-part, schema-qualified) name: `schema.table`,
/// `db.schema.table`, or a bare `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectName(pub Vec<Ident>);

impl ObjectName {
    pub fn from_single(ident: impl Into<Ident>) -> Self {
        ObjectName(vec![ident.into()])
    }
}

impl DialectDisplay for ObjectName {
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        display_separated(&self.0, ".").fmt(f, dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn distinct_quote_styles_are_unequal() {
        let a = Ident::new("foo");
        let b = Ident::with_quote('"', "foo");
        assert_ne!(a, b);
    }

    #[test]
    fn quoted_ident_doubles_embedded_quote() {
        let dialect = GenericDialect {};
        let ident = Ident::with_quote('"', "a\"b");
        assert_eq!(ident.sql(&dialect).unwrap(), "\"a\"\"b\"");
    }

    #[test]
    fn object_name_joins_with_dot() {
        let dialect = GenericDialect {};
        let name = ObjectName(vec![Ident::new("schema"), Ident::new("table")]);
        assert_eq!(name.sql(&dialect).unwrap(), "schema.table");
    }
}
