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

use clap::{App, YamlLoader};
use env_logger::Builder;
use libmarkersplice::*;
use std::path::PathBuf;

use log::{debug, info, warn};

pub(crate) struct BinOptions {
    pub cli_config: PatchConfig,
    pub config_path: Option<PathBuf>,
    pub dry_run: bool,
    pub strict: bool,
    pub verbose: bool,
    pub debug: bool,
}

fn main() {
    let bin_options = help_string();

    set_up_logging(bin_options.debug, bin_options.verbose);

    // Failures are reported on stdout and still exit with 0, unless the user asked for --strict.
    let patched = report(actual_work(&bin_options));

    if !patched && bin_options.strict {
        std::process::exit(1);
    }
}

fn actual_work(opts: &BinOptions) -> Result<Outcome, Error> {
    let config_path = opts.config_path.clone().or_else(PatchConfig::env_path);

    let file_config = match config_path {
        Some(path) => PatchConfig::from_file(&path)?,
        None => PatchConfig::default(),
    };

    let mut job = opts.cli_config.clone().or(file_config).into_job()?;
    job.set_dry_run(opts.dry_run);

    debug!("Running {:?}", job);

    let dry_run = job.dry_run;

    job.run_with(|region| {
        // stdout carries the patched text on a dry run, so the status goes to the log
        if dry_run {
            info!(
                "Found function start at line {} and end at line {}",
                region.start, region.end
            );
        } else {
            println!(
                "Found function start at line {} and end at line {}",
                region.start, region.end
            );
        }
    })
}

// Prints the status lines for `result`, returns whether the target was patched
fn report(result: Result<Outcome, Error>) -> bool {
    match result {
        Ok(Outcome::Patched { .. }) => {
            println!("Successfully patched the file.");
            true
        }
        Ok(Outcome::DryRun { content, .. }) => {
            print!("{}", content);
            true
        }
        Ok(Outcome::NotFound { start, end }) => {
            println!("Could not find start or end markers.");
            println!("Start index: {}", start);
            println!("End index: {}", end);
            false
        }
        Err(e) => {
            debug!("{:?}", e);
            println!("Error: {}", e);
            false
        }
    }
}

fn set_up_logging(is_debug: bool, is_verbose: bool) {
    let mut builder = Builder::new();

    if is_debug {
        builder
            .filter_module("libmarkersplice", log::LevelFilter::Debug)
            .filter_module("markersplice", log::LevelFilter::Debug);
    } else if is_verbose {
        builder
            .filter_module("libmarkersplice", log::LevelFilter::Info)
            .filter_module("markersplice", log::LevelFilter::Info);
    } else {
        builder
            .filter_module("libmarkersplice", log::LevelFilter::Warn)
            .filter_module("markersplice", log::LevelFilter::Warn);
    }

    builder.default_format_timestamp(false).init();

    if is_debug && is_verbose {
        warn!("Specified both --verbose and --debug! Will ignore --verbose.");
    }
}

// Print the help script if invoked with `--help`/`-h`
fn help_string() -> BinOptions {
    let help_yaml =
        YamlLoader::load_from_str(include_str!(concat!(env!("OUT_DIR"), "/cli_gen.yml"))).unwrap();
    let matches = App::from_yaml(&help_yaml[0]).get_matches();

    // Unset flags leave the choice to the patch file
    let start_match = if matches.is_present("first") {
        Some(StartMatch::First)
    } else if matches.is_present("last") {
        Some(StartMatch::Last)
    } else {
        None
    };

    let atomic = if matches.is_present("atomic") {
        Some(true)
    } else if matches.is_present("no_atomic") {
        Some(false)
    } else {
        None
    };

    let cli_config = PatchConfig {
        target: matches.value_of("TARGET").map(PathBuf::from),
        content: matches.value_of("CONTENT").map(PathBuf::from),
        start: matches.value_of("start").map(unescape),
        end: matches.value_of("end").map(unescape),
        separator: matches.value_of("separator").map(unescape),
        start_match,
        atomic,
    };

    let config_path = matches.value_of("config").map(PathBuf::from);

    let dry_run = matches.is_present("dry_run");

    let strict = matches.is_present("strict");

    let verbose = matches.is_present("verbose");

    let debug = matches.is_present("debug");

    BinOptions {
        cli_config,
        config_path,
        dry_run,
        strict,
        verbose,
        debug,
    }
}
