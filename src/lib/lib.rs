//This file is part of markersplice
//
//markersplice is free software: you can redistribute it and/or modify
//it under the terms of the GNU General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//markersplice is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU General Public License for more details.
//
//You should have received a copy of the GNU General Public License
//along with markersplice.  If not, see <http://www.gnu.org/licenses/>.

//! libmarkersplice replaces the lines between two marker lines of a text file with the
//! contents of another file. The line holding the start marker is replaced, the line holding
//! the end marker is kept.
//!
//! # Usage
//!
//! ```
//! use libmarkersplice::*;
//!
//! let text = "a\nfn old() {\n}\nfn next() {\n}\n";
//!
//! let (region, patched) = Splicer::new(Markers::new("fn old(", "fn next("))
//!     .set_separator("\n")
//!     .splice_str(text, "fn new() {}\n")
//!     .unwrap();
//!
//! assert_eq!(region, Region { start: 1, end: 3 });
//! assert_eq!(patched, "a\nfn new() {}\n\nfn next() {\n}\n");
//! ```
//!
//! Patching a file in place goes through a [PatchJob](crate::patch::PatchJob), usually built
//! from a [PatchConfig](crate::config::PatchConfig).

pub mod config;
pub mod errors;
pub mod helpers;
pub mod patch;
pub mod splicer;
pub mod types;

pub use crate::config::*;
pub use crate::errors::*;
pub use crate::helpers::*;
pub use crate::patch::*;
pub use crate::types::*;
