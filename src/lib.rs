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

//! A multi-dialect SQL lexer, parser, AST, and dialect-aware SQL generator.
//!
//! ```
//! use sqlparse_rs::dialect::GenericDialect;
//! use sqlparse_rs::parser::Parser;
//!
//! let dialect = GenericDialect {};
//! let sql = "SELECT a, b FROM t WHERE a > 1";
//! let statements = Parser::parse_sql(sql, &dialect).unwrap();
//! assert_eq!(statements.len(), 1);
//! ```

pub mod ast;
pub mod dialect;
pub mod error;
pub mod keywords;
pub mod parser;
pub mod span;
pub mod tokenizer;

#[cfg(feature = "visitor")]
pub mod visitor;

pub use ast::Statement;
pub use dialect::{Dialect, DialectDisplay};
pub use error::{ParserError, TokenizerError};
pub use parser::Parser;
pub use tokenizer::Tokenizer;
