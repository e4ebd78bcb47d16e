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

use crate::errors::Error;
use serde_derive::Deserialize;
use std::fmt;

/// Marker of the function the default patch replaces
pub const DEFAULT_START_MARKER: &str = "void _showConvertToTaskDialog(";
/// Marker of the function following the replaced one
pub const DEFAULT_END_MARKER: &str = "Widget _buildTasksCard(";
/// Inserted between the replacement text and the end line, restoring the indentation of the
/// end line that the replaced region used to carry.
pub const DEFAULT_SEPARATOR: &str = "\n\n  ";

/// The Splicer struct, which locates a [Region](crate::types::Region) and builds the patched text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Splicer {
    pub markers: Markers,
    pub start_match: StartMatch,
    pub separator: String,
}

/// The two literal substrings that delimit the replaced lines
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Markers {
    pub fn new(start: &str, end: &str) -> Markers {
        Markers {
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)
    }
}

/// Which occurrence of the start marker the region begins at
#[derive(Copy, Clone, Eq, Ord, PartialOrd, Hash, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMatch {
    /// The last start line before the first end line. Scanning stops at that end line.
    Last,
    /// The first start line, ended by the first end line at or after it.
    First,
}

impl Default for StartMatch {
    fn default() -> Self {
        StartMatch::Last
    }
}

/// Line indices of a located region. `start` is replaced, `end` is kept.
#[derive(Copy, Clone, Eq, Ord, PartialOrd, Hash, Debug, PartialEq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// # Errors
    ///
    /// * If `start` comes after `end`
    pub fn new(start: usize, end: usize) -> Result<Region, Error> {
        if start > end {
            return Err(Error::MarkerOrder { start, end });
        }

        Ok(Region { start, end })
    }
}

/// A line index that might not have been found. Displays as `-1` if it's missing.
#[derive(Copy, Clone, Eq, Ord, PartialOrd, Hash, Debug, PartialEq, Default)]
pub struct MarkerIndex(pub Option<usize>);

impl fmt::Display for MarkerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(i) => write!(f, "{}", i),
            None => write!(f, "-1"),
        }
    }
}

/// What a [PatchJob](crate::patch::PatchJob) run ended with
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The target was rewritten
    Patched { region: Region },
    /// Nothing was written, `content` is what would have been
    DryRun { region: Region, content: String },
    /// At least one marker is missing, the target is untouched
    NotFound { start: MarkerIndex, end: MarkerIndex },
}
