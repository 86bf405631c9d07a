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

//! The uniform "list of children" printers spec.md §4.G asks for, hoisted
//! out of the teacher's `ast/query.rs` call sites (`display_comma_separated`
//! previously lived inline there per-call).

use core::fmt;

use crate::dialect::{Dialect, DialectDisplay};

pub struct DisplaySeparated<'a, T>
where
    T: DialectDisplay,
{
    slice: &'a [T],
    sep: &'static str,
}

impl<'a, T> DialectDisplay for DisplaySeparated<'a, T>
where
    T: DialectDisplay,
{
    fn fmt(&self, f: &mut dyn fmt::Write, dialect: &dyn Dialect) -> fmt::Result {
        let mut delim = "";
        for t in self.slice {
            f.write_str(delim)?;
            delim = self.sep;
            t.fmt(f, dialect)?;
        }
        Ok(())
    }
}

pub fn display_separated<'a, T>(slice: &'a [T], sep: &'static str) -> DisplaySeparated<'a, T>
where
    T: DialectDisplay,
{
    DisplaySeparated { slice, sep }
}

pub fn display_comma_separated<T>(slice: &[T]) -> DisplaySeparated<'_, T>
where
    T: DialectDisplay,
{
    DisplaySeparated { slice, sep: ", " }
}
