use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use varhunter_core::{
    collect_variables, scan_file, source_file_paths, write_tokens, LanguageProfile, ScanError, ScanOptions,
    TokenExtractor, OUTPUT_FILE_NAME,
};

fn testdata() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("testdata")
}

fn as_strs(tokens: &[Vec<u8>]) -> Vec<&str> {
    tokens.iter().map(|t| std::str::from_utf8(t).unwrap()).collect()
}

fn relative_sorted(paths: Vec<PathBuf>) -> Vec<String> {
    let root = testdata();
    let mut out: Vec<String> = paths
        .iter()
        .map(|p| p.strip_prefix(&root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    out.sort();
    out
}

#[test]
fn excluding_vendor_directory() {
    let got = source_file_paths(&testdata(), "vendor", &LanguageProfile::default()).unwrap();
    assert_eq!(relative_sorted(got), vec!["README.php", "src/Test.php"]);
}

#[test]
fn excluding_single_file() {
    let got = source_file_paths(&testdata(), "Exclude1.php", &LanguageProfile::default()).unwrap();
    assert_eq!(relative_sorted(got), vec!["README.php", "src/Test.php", "vendor/Exclude2.php"]);
}

#[test]
fn readme_tokens_in_extraction_order() {
    let ex = TokenExtractor::new(&LanguageProfile::default()).unwrap();
    let got = scan_file(&testdata().join("README.php"), &ex).unwrap();
    assert_eq!(as_strs(&got), vec!["$readmePhp", "$foo"]);
}

#[test]
fn collects_sorted_unique_variables() {
    let opts = ScanOptions { exclude: "vendor".into(), threads: Some(2), ..Default::default() };
    let out = collect_variables(&testdata(), &opts).unwrap();
    assert_eq!(as_strs(&out.tokens), vec!["$bar", "$foo", "$readmePhp"]);
    assert!(out.failures.is_empty());
    assert_eq!(out.stats.files_found, 2);
}

#[test]
fn whole_tree_without_exclusion() {
    let out = collect_variables(&testdata(), &ScanOptions::default()).unwrap();
    assert_eq!(
        as_strs(&out.tokens),
        vec!["$bar", "$excluded1", "$excluded2", "$foo", "$one", "$readmePhp", "$two"]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let opts = ScanOptions { threads: Some(4), ..Default::default() };
    let first = collect_variables(&testdata(), &opts).unwrap().tokens;
    for _ in 0..5 {
        assert_eq!(collect_variables(&testdata(), &opts).unwrap().tokens, first);
    }
}

#[test]
fn missing_root_collects_nothing() {
    let err = collect_variables(&testdata().join("heavensdoor"), &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::RootNotFound { .. }));
}

#[test]
fn writes_collected_variables() {
    let dir = tempfile::tempdir().unwrap();
    let out = collect_variables(&testdata(), &ScanOptions::default()).unwrap();
    let file = dir.path().join(OUTPUT_FILE_NAME);
    write_tokens(&file, &out.tokens).unwrap();
    let written = std::fs::read_to_string(&file).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, as_strs(&out.tokens));
}
