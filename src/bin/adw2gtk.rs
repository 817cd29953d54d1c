//! Command-line interface for adw2gtk
//!
//! Usage:
//!   adw2gtk <path>           - Convert one .ui file, or every .ui file in a directory
//!   adw2gtk <path> --check   - Validate the conversion without writing anything

use adw2gtk::report::BatchReport;
use adw2gtk::{check_file, convert_file, discover};
use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("adw2gtk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert GTK4/libadwaita UI definition files to GTK3")
        .arg(
            Arg::new("path")
                .help("A .ui file, or a directory containing .ui files")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Convert and validate without writing files")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = PathBuf::from(
        matches
            .get_one::<String>("path")
            .expect("path is required"),
    );
    let check = matches.get_flag("check");

    let files = match collect_files(&path) {
        Ok(files) => files,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    println!("Found {} .ui files to convert", files.len());
    println!();

    let mut report = BatchReport::new();
    for file in &files {
        println!("Converting {}...", file.display());
        let result = if check {
            check_file(file)
        } else {
            convert_file(file)
        };
        let line = match result {
            Ok(()) => report.record_success(file),
            Err(err) => report.record_failure(file, &err),
        };
        println!("{}", line);
    }

    println!();
    println!("{}", report.summary());

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn collect_files(path: &Path) -> Result<Vec<PathBuf>, String> {
    if path.is_dir() {
        let files = discover::find_ui_files(path)
            .map_err(|err| format!("Error reading {}: {}", path.display(), err))?;
        if files.is_empty() {
            return Err(format!("No .ui files found in {}", path.display()));
        }
        Ok(files)
    } else if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(format!("Error: {} not found", path.display()))
    }
}
