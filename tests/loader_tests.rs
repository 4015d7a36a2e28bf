use covconsole::coverage::{load_coverage, parse_lcov_file, InputFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn test_parse_lcov_empty_file() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("empty.lcov");
    fs::write(&file_path, "").unwrap();

    let result = parse_lcov_file(&file_path).unwrap();
    assert!(result.source_files.is_empty());
    assert_eq!(result.total_lines, 0);
}

#[test]
fn test_parse_lcov_fixture() {
    let result = parse_lcov_file(&fixture("sample.info")).unwrap();

    assert_eq!(result.file_count(), 4);
    assert_eq!(result.covered_lines, 10);
    assert_eq!(result.total_lines, 15);

    let parser = &result.source_files[0];
    assert_eq!(parser.filename, "/work/app/src/parser.rs");
    assert_eq!(parser.lines_of_code, 7);
    let missed: Vec<u32> = parser.missed_lines().map(|l| l.line_number).collect();
    assert_eq!(missed, vec![5, 6, 7, 11]);

    let lib = &result.source_files[1];
    assert!(lib.is_fully_covered());
}

#[test]
fn test_parse_lcov_ignores_function_and_branch_records() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("branches.info");
    let lcov_content = r#"SF:src/main.rs
FN:10,main
FNDA:1,main
FNF:1
FNH:1
BRDA:10,0,0,1
BRDA:10,0,1,-
BRF:2
BRH:1
DA:10,1
DA:11,0
end_of_record
"#;
    fs::write(&file_path, lcov_content).unwrap();

    let result = parse_lcov_file(&file_path).unwrap();
    let file = &result.source_files[0];
    assert_eq!(file.filename, "src/main.rs");
    assert_eq!(file.lines_of_code, 2);
    assert_eq!(file.covered_percent, 50.0);
}

#[test]
fn test_load_simplecov_fixture() {
    let result = load_coverage(&fixture("resultset.json"), InputFormat::Auto).unwrap();

    assert_eq!(result.file_count(), 2);
    assert_eq!(result.total_lines, 10);
    assert_eq!(result.covered_lines, 8);
    assert_eq!(result.covered_percent, 80.0);

    // Resultset files come out sorted by path
    let foo = &result.source_files[1];
    assert_eq!(foo.filename, "/work/app/lib/foo.rb");
    assert_eq!(foo.covered_percent, 75.0);
    let missed: Vec<u32> = foo.missed_lines().map(|l| l.line_number).collect();
    assert_eq!(missed, vec![4, 5]);
}

#[test]
fn test_forced_format_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("coverage.json");
    fs::write(&file_path, "SF:/a.rs\nDA:1,0\nend_of_record\n").unwrap();

    assert!(load_coverage(&file_path, InputFormat::Auto).is_err());
    let result = load_coverage(&file_path, InputFormat::Lcov).unwrap();
    assert_eq!(result.covered_percent, 0.0);
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_coverage(Path::new("/no/such/lcov.info"), InputFormat::Auto).unwrap_err();
    assert!(err.to_string().contains("/no/such/lcov.info"));
}
