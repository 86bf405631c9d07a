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

use crate::span::Location;
use thiserror::Error;

/// The lexer could not form a token: an unterminated literal, an invalid
/// numeric run, or an unrecognized character.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message} at {location}")]
pub struct TokenizerError {
    pub message: String,
    pub location: Location,
}

impl TokenizerError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        TokenizerError {
            message: message.into(),
            location,
        }
    }
}

/// The parser encountered an unexpected token, or a form unsupported by
/// the chosen dialect.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParserError {
    #[error(transparent)]
    TokenizerError(#[from] TokenizerError),

    #[error("{message} at {location}")]
    ParserError {
        message: String,
        location: Location,
        expected: Vec<String>,
    },

    #[error("recursion limit exceeded while parsing at {0}")]
    RecursionLimitExceeded(Location),
}

impl ParserError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        ParserError::ParserError {
            message: message.into(),
            location,
            expected: Vec::new(),
        }
    }

    pub fn expected(message: impl Into<String>, location: Location, expected: Vec<String>) -> Self {
        ParserError::ParserError {
            message: message.into(),
            location,
            expected,
        }
    }
}

/// Wraps the plain `std::fmt::Error` the unparser's `dyn Write` sink can
/// produce. Not a distinct externally meaningful error family -- see
/// DESIGN.md -- but `DialectDisplay::sql` needs a named type to return.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("formatting error")]
pub struct FormatError;

impl From<core::fmt::Error> for FormatError {
    fn from(_: core::fmt::Error) -> Self {
        FormatError
    }
}

/// Convenience macro mirroring the `parser_err!` helper the wider SQL
/// parser corpus uses at every unexpected-token site.
#[macro_export]
macro_rules! parser_err {
    ($MSG:expr, $loc:expr) => {
        Err($crate::error::ParserError::new($MSG, $loc))
    };
}
