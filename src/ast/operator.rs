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

use crate::dialect::{Dialect, DialectDisplay};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    StringConcat,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Spaceship,
    Eq,
    NotEq,
    And,
    Or,
    Xor,
    BitwiseOr,
    BitwiseAnd,
    BitwiseXor,
    PGBitwiseXor,
    PGBitwiseShiftLeft,
    PGBitwiseShiftRight,
    /// MySQL's `DIV` integer-division operator
    MyIntegerDivide,
    /// Postgres exponent `^`
    PGExp,
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
    /// `#>`
    HashArrow,
    /// `#>>`
    HashLongArrow,
    /// `@>`
    AtArrow,
    /// `<@`
    ArrowAt,
    /// `#-`
    HashMinus,
    /// `@?`
    AtQuestion,
    /// `@@`
    AtAt,
    /// `?&`
    QuestionAnd,
    /// `?|`
    QuestionPipe,
    /// `?`
    Question,
}

impl DialectDisplay for BinaryOperator {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        use BinaryOperator::*;
        f.write_str(match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
            StringConcat => "||",
            Gt => ">",
            Lt => "<",
            GtEq => ">=",
            LtEq => "<=",
            Spaceship => "<=>",
            Eq => "=",
            NotEq => "<>",
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            BitwiseOr => "|",
            BitwiseAnd => "&",
            BitwiseXor => "^",
            PGBitwiseXor => "#",
            PGBitwiseShiftLeft => "<<",
            PGBitwiseShiftRight => ">>",
            MyIntegerDivide => "DIV",
            PGExp => "^",
            Arrow => "->",
            LongArrow => "->>",
            HashArrow => "#>",
            HashLongArrow => "#>>",
            AtArrow => "@>",
            ArrowAt => "<@",
            HashMinus => "#-",
            AtQuestion => "@?",
            AtAt => "@@",
            QuestionAnd => "?&",
            QuestionPipe => "?|",
            Question => "?",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    /// Postgres bitwise-not `~`
    PGBitwiseNot,
    /// Postgres square root `|/`
    PGSquareRoot,
    /// Postgres cube root `||/`
    PGCubeRoot,
    /// Postgres factorial postfix `!`
    PGPostfixFactorial,
    /// Postgres prefix factorial `!!` (deprecated, still lexed)
    PGPrefixFactorial,
    /// Postgres absolute value prefix `@`
    PGAbs,
}

impl DialectDisplay for UnaryOperator {
    fn fmt(&self, f: &mut dyn fmt::Write, _dialect: &dyn Dialect) -> fmt::Result {
        use UnaryOperator::*;
        f.write_str(match self {
            Plus => "+",
            Minus => "-",
            Not => "NOT",
            PGBitwiseNot => "~",
            PGSquareRoot => "|/",
            PGCubeRoot => "||/",
            PGPostfixFactorial => "!",
            PGPrefixFactorial => "!!",
            PGAbs => "@",
        })
    }
}
