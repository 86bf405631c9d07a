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

//! The AST: a tree of immutable, value-typed sum types rooted at
//! [`Statement`]. Printing back to SQL text goes through
//! [`crate::dialect::DialectDisplay`], never through `std::fmt::Display`
//! directly, since every node's surface form depends on the target dialect.

pub mod data_type;
pub mod ddl;
pub mod dml;
pub mod expr;
pub mod helpers;
pub mod ident;
pub mod operator;
pub mod query;
pub mod statement;
pub mod value;

pub use data_type::*;
pub use ddl::*;
pub use dml::*;
pub use expr::*;
pub use helpers::*;
pub use ident::*;
pub use operator::*;
pub use query::*;
pub use statement::*;
pub use value::*;
