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
use crate::helpers::*;
use crate::types::*;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// One patch: which file to rewrite, where the replacement comes from and how to splice it in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchJob {
    pub target: PathBuf,
    pub content: PathBuf,
    pub splicer: Splicer,
    pub atomic: bool,
    pub dry_run: bool,
}

impl PatchJob {
    pub fn new(target: &Path, content: &Path, splicer: Splicer) -> PatchJob {
        PatchJob {
            target: target.to_owned(),
            content: content.to_owned(),
            splicer,
            atomic: false,
            dry_run: false,
        }
    }

    pub fn set_atomic(&mut self, atomic: bool) -> &mut PatchJob {
        self.atomic = atomic;
        self
    }

    pub fn set_dry_run(&mut self, dry_run: bool) -> &mut PatchJob {
        self.dry_run = dry_run;
        self
    }

    /// Reads both files, splices the replacement into the target and writes it back.
    ///
    /// Missing markers aren't an error here: the target is left alone and
    /// [Outcome::NotFound](crate::types::Outcome::NotFound) is returned.
    ///
    /// # Errors
    ///
    /// * If either file can't be read or isn't valid UTF-8
    /// * If the target can't be written
    pub fn run(&self) -> Result<Outcome, Error> {
        self.run_with(|_| ())
    }

    /// Like [run](crate::patch::PatchJob::run), but calls `on_found` with the located region
    /// before anything is written, so it's reported even if the write fails.
    ///
    /// # Errors
    ///
    /// * If either file can't be read or isn't valid UTF-8
    /// * If the target can't be written
    pub fn run_with<F: FnOnce(Region)>(&self, on_found: F) -> Result<Outcome, Error> {
        let target_text = read_file(&self.target)?;
        let replacement = read_file(&self.content)?;

        let (region, new_text) = match self.splicer.splice_str(&target_text, &replacement) {
            Ok(spliced) => spliced,
            Err(Error::MarkersNotFound { start, end }) => {
                warn!(
                    "Markers not found in {}, leaving it untouched",
                    self.target.display()
                );
                return Ok(Outcome::NotFound { start, end });
            }
            Err(e) => return Err(e),
        };

        on_found(region);

        if self.dry_run {
            return Ok(Outcome::DryRun {
                region,
                content: new_text,
            });
        }

        write_file(&self.target, &new_text, self.atomic)?;
        info!("Patched {}", self.target.display());

        Ok(Outcome::Patched { region })
    }
}
