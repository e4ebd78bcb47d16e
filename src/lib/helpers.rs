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
use log::debug;
use std::borrow::Cow;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use tempfile::NamedTempFile;

/// Splits `text` into lines, keeping each line's terminator. A missing terminator on the
/// last line stays missing, so joining the lines gives back `text`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Turns `\r\n` and lone `\r` line endings into `\n`, so the target, the replacement and the
/// separator all end their lines the same way. Borrows `text` if there's nothing to convert.
pub fn normalize_newlines(text: &str) -> Cow<str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Resolves the backslash escapes `\n`, `\r`, `\t` and `\\`, so markers and separators can be
/// passed on the command line. Other backslashes are kept as they are.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Reads the whole file at `path`, which has to be valid UTF-8.
///
/// # Errors
///
/// * If the file can't be opened or read
/// * If the file isn't valid UTF-8
pub fn read_file(path: &Path) -> Result<String, Error> {
    debug!("Reading {}", path.display());

    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(String::from_utf8(bytes)?)
}

/// Writes `content` to `path`, replacing what was there.
///
/// Without `atomic` the file is truncated and rewritten in place, so a failing write can leave
/// it truncated. With `atomic` the content goes to a temporary file next to `path` first, which
/// is then renamed over it. A symlinked `path` is resolved first, so both ways write through
/// the link and leave the link itself in place.
///
/// # Errors
///
/// * If the file (or the temporary file) can't be created or written
/// * If the temporary file can't be renamed over `path`
pub fn write_file(path: &Path, content: &str, atomic: bool) -> Result<(), Error> {
    if !atomic {
        debug!("Writing {} in place", path.display());
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        return Ok(());
    }

    let resolved = std::fs::canonicalize(path).ok();
    let path = resolved.as_ref().map_or(path, |p| p.as_path());

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    debug!(
        "Writing {} through a temporary file in {}",
        path.display(),
        dir.display()
    );

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    // Keep the permissions of the file we're replacing
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    tmp.persist(path)?;

    Ok(())
}
