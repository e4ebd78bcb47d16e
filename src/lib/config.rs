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
use crate::helpers::read_file;
use crate::patch::PatchJob;
use crate::types::*;
use log::{debug, info};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable pointing to a patch file if none is passed explicitly
pub const CONFIG_ENV: &str = "MARKERSPLICE_CONFIG";

/// The settings of a patch, as read from a TOML patch file or the command line.
/// Every field is optional, later layers fill in what earlier ones left out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchConfig {
    pub target: Option<PathBuf>,
    pub content: Option<PathBuf>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub separator: Option<String>,
    pub start_match: Option<StartMatch>,
    pub atomic: Option<bool>,
}

impl PatchConfig {
    /// Parses a patch file. Relative `target`/`content` paths are kept as written, see
    /// [from_file](crate::config::PatchConfig::from_file) for resolving them.
    ///
    /// # Errors
    ///
    /// * If `input` isn't valid TOML or contains unknown keys
    pub fn from_toml(input: &str) -> Result<PatchConfig, Error> {
        Ok(toml::from_str(input)?)
    }

    /// Reads the patch file at `path`. Relative paths inside it resolve against the directory
    /// the patch file lives in.
    ///
    /// # Errors
    ///
    /// * If the file can't be read
    /// * If it isn't a valid patch file
    pub fn from_file(path: &Path) -> Result<PatchConfig, Error> {
        info!("Reading patch file {}", path.display());

        let mut config = PatchConfig::from_toml(&read_file(path)?)?;

        if let Some(base) = path.parent() {
            config.target = config.target.map(|p| base.join(p));
            config.content = config.content.map(|p| base.join(p));
        }

        debug!("Patch file settings: {:?}", config);

        Ok(config)
    }

    /// Returns the patch file named by $MARKERSPLICE_CONFIG, if it's set
    pub fn env_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// Layers `self` over `fallback`: values set in `self` win
    pub fn or(self, fallback: PatchConfig) -> PatchConfig {
        PatchConfig {
            target: self.target.or(fallback.target),
            content: self.content.or(fallback.content),
            start: self.start.or(fallback.start),
            end: self.end.or(fallback.end),
            separator: self.separator.or(fallback.separator),
            start_match: self.start_match.or(fallback.start_match),
            atomic: self.atomic.or(fallback.atomic),
        }
    }

    /// Turns the settings into a [PatchJob](crate::patch::PatchJob), filling unset markers and
    /// separator with the built-in defaults.
    ///
    /// # Errors
    ///
    /// * If no target or no content file is set
    pub fn into_job(self) -> Result<PatchJob, Error> {
        let target = self.target.ok_or_else(|| {
            Error::TooLittleInfo("patch: no target file given".to_string())
        })?;
        let content = self.content.ok_or_else(|| {
            Error::TooLittleInfo("patch: no content file given".to_string())
        })?;

        let mut splicer = Splicer::new(Markers::new(
            self.start.as_ref().map_or(DEFAULT_START_MARKER, String::as_str),
            self.end.as_ref().map_or(DEFAULT_END_MARKER, String::as_str),
        ));
        splicer.set_start_match(self.start_match.unwrap_or_default());
        if let Some(separator) = &self.separator {
            splicer.set_separator(separator);
        }

        let mut job = PatchJob::new(&target, &content, splicer);
        job.set_atomic(self.atomic.unwrap_or(false));

        Ok(job)
    }
}
