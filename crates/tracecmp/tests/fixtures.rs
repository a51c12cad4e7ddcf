//! Trace pairs under `tests/fixtures/`, one trial per directory.
//!
//! Each case holds `emulator.log`, `reference.log`, `expected.txt` (either
//! `pass` or the exact error message) and an optional `truncate` file with
//! the truncation length.

use std::fs;
use std::path::{Path, PathBuf};

use libtest_mimic::{Arguments, Failed, Trial};
use tracecmp::CompareConfig;

fn main() {
    let args = Arguments::from_args();

    let trials = collect_cases()
        .into_iter()
        .map(|dir| {
            let name = ident_from_path(&dir);
            Trial::test(name, move || run_case(&dir))
        })
        .collect();

    libtest_mimic::run(&args, trials).exit();
}

fn run_case(dir: &Path) -> Result<(), Failed> {
    let expected = fs::read_to_string(dir.join("expected.txt"))
        .map_err(|err| Failed::from(format!("missing expected.txt: {err}")))?;
    let config = read_config(dir)?;

    let actual = match tracecmp::compare_files(
        &dir.join("emulator.log"),
        &dir.join("reference.log"),
        &config,
    ) {
        Ok(_) => "pass".to_string(),
        Err(err) => err.to_string(),
    };

    if actual.trim_end() == expected.trim_end() {
        Ok(())
    } else {
        Err(Failed::from(format!(
            "expected:\n{}\nactual:\n{}",
            expected.trim_end(),
            actual.trim_end()
        )))
    }
}

fn read_config(dir: &Path) -> Result<CompareConfig, Failed> {
    let path = dir.join("truncate");
    if !path.exists() {
        return Ok(CompareConfig::full());
    }
    let text = fs::read_to_string(&path).map_err(Failed::from)?;
    let len = text
        .trim()
        .parse()
        .map_err(|err| Failed::from(format!("bad truncate value {text:?}: {err}")))?;
    Ok(CompareConfig::truncated(len))
}

fn collect_cases() -> Vec<PathBuf> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut cases: Vec<PathBuf> = fs::read_dir(&root)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect()
        })
        .unwrap_or_default();
    cases.sort();
    cases
}

fn ident_from_path(path: &Path) -> String {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    let mut s = String::from("fixture::");
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            s.push(ch);
        } else {
            s.push('_');
        }
    }
    s
}
