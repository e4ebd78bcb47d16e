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
use crate::helpers::{normalize_newlines, split_lines};
use crate::types::*;

use log::{debug, info};

impl Splicer {
    /// Initializes a new Splicer for `markers`, with the default
    /// [StartMatch](crate::types::StartMatch) and separator.
    pub fn new(markers: Markers) -> Splicer {
        Splicer {
            markers,
            start_match: StartMatch::default(),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }

    /// Sets which occurrence of the start marker the region begins at
    pub fn set_start_match(&mut self, start_match: StartMatch) -> &mut Splicer {
        self.start_match = start_match;
        self
    }

    /// Sets the text inserted between the replacement and the end line
    pub fn set_separator(&mut self, separator: &str) -> &mut Splicer {
        self.separator = separator.to_owned();
        self
    }

    /// Finds the [Region](crate::types::Region) to replace in `lines`.
    ///
    /// # Errors
    ///
    /// * If either marker can't be found, carrying both indices as far as they were found
    pub fn locate(&self, lines: &[&str]) -> Result<Region, Error> {
        let (start, end) = match self.start_match {
            StartMatch::Last => self.locate_last(lines),
            StartMatch::First => self.locate_first(lines),
        };

        debug!(
            "Located start marker at {} and end marker at {}",
            MarkerIndex(start),
            MarkerIndex(end)
        );

        match (start, end) {
            (Some(start), Some(end)) => Region::new(start, end),
            _ => Err(Error::MarkersNotFound {
                start: MarkerIndex(start),
                end: MarkerIndex(end),
            }),
        }
    }

    // Every start line overwrites the previous one until the first end line stops the scan.
    // A start marker on the end line itself still counts.
    fn locate_last(&self, lines: &[&str]) -> (Option<usize>, Option<usize>) {
        let mut start = None;

        for (i, line) in lines.iter().enumerate() {
            if line.contains(self.markers.start.as_str()) {
                start = Some(i);
            }
            if line.contains(self.markers.end.as_str()) {
                return (start, Some(i));
            }
        }

        (start, None)
    }

    fn locate_first(&self, lines: &[&str]) -> (Option<usize>, Option<usize>) {
        let start = lines
            .iter()
            .position(|l| l.contains(self.markers.start.as_str()));

        let end = start.and_then(|s| {
            lines[s..]
                .iter()
                .position(|l| l.contains(self.markers.end.as_str()))
                .map(|i| s + i)
        });

        (start, end)
    }

    /// Replaces the lines from the start line up to (not including) the end line with
    /// `replacement` followed by the separator. Returns the located region and the new text.
    ///
    /// # Errors
    ///
    /// * If either marker can't be found
    pub fn splice(&self, lines: &[&str], replacement: &str) -> Result<(Region, String), Error> {
        let region = self.locate(lines)?;

        info!(
            "Replacing lines {}..{} ({} lines)",
            region.start,
            region.end,
            region.end - region.start
        );

        let head = &lines[..region.start];
        let tail = &lines[region.end..];

        let mut out = String::with_capacity(
            head.iter().chain(tail.iter()).map(|l| l.len()).sum::<usize>()
                + replacement.len()
                + self.separator.len(),
        );

        out.extend(head.iter().copied());
        out.push_str(replacement);
        out.push_str(&self.separator);
        out.extend(tail.iter().copied());

        Ok((region, out))
    }

    /// Like [splice](crate::types::Splicer::splice), but splits `text` into lines first.
    /// `\r\n` and `\r` in `text` and `replacement` become `\n`, so the result has one line ending
    /// throughout.
    ///
    /// # Errors
    ///
    /// * If either marker can't be found
    pub fn splice_str(&self, text: &str, replacement: &str) -> Result<(Region, String), Error> {
        let text = normalize_newlines(text);
        let replacement = normalize_newlines(replacement);

        self.splice(&split_lines(&text), &replacement)
    }
}

impl Default for Splicer {
    fn default() -> Self {
        Splicer::new(Markers::default())
    }
}
