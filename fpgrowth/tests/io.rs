use std::fs;
use std::io::Write;

use fpgrowth::io::{append_report, load_transactions, parse_transactions, render_report, run_dataset};
use fpgrowth::{FpError, MinSupport, MiningConfig};
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn parse_splits_on_whitespace_and_keeps_blank_lines() {
    let input = "a b  c\n\nb\td\n";
    let transactions = parse_transactions(input.as_bytes()).unwrap();
    assert_eq!(
        transactions,
        vec![vec!["a", "b", "c"], vec![], vec!["b", "d"]]
    );
}

#[test]
fn load_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1 2 3").unwrap();
    writeln!(file, "2 3").unwrap();

    let transactions = load_transactions(file.path()).unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[1], vec!["2", "3"]);
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = load_transactions(&path).unwrap_err();
    assert!(matches!(err, FpError::Read { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[rstest]
#[case(MinSupport::Count(2), "min support: 2 ====")]
#[case(MinSupport::Fraction(0.4), "min support: 0.4 (2) ====")]
fn run_and_render(#[case] min_support: MinSupport, #[case] header_tail: &str) {
    let transactions = parse_transactions("A B\nB C\nA B C\nA\nB C D\n".as_bytes()).unwrap();
    let config = MiningConfig::new(min_support);

    let (report, patterns) = run_dataset("demo", &transactions, &config).unwrap();
    assert_eq!(report.min_count, 2);
    assert_eq!(report.pattern_count, 5);
    assert_eq!(report.patterns_by_size.get(&1), Some(&3));
    assert_eq!(report.patterns_by_size.get(&2), Some(&2));
    assert!(report.estimated_bytes > 0);

    let header = render_report::<String>(&report, None);
    let first_line = header.lines().next().unwrap();
    assert!(first_line.starts_with("==== dataset: demo |"));
    assert!(first_line.ends_with(header_tail));
    assert!(header.contains("frequent itemsets: 5\n"));
    assert!(header.ends_with("\n\n"));

    let full = render_report(&report, Some(&patterns));
    assert!(full.contains("[A, B] (2)\n"));
    assert!(full.contains("[C, B] (3)\n"));
    assert!(!full.contains('D'));
}

#[test]
fn run_rejects_bad_fraction() {
    let transactions = vec![vec!["a".to_string()]];
    let config = MiningConfig::new(MinSupport::Fraction(2.0));
    assert!(matches!(
        run_dataset("bad", &transactions, &config),
        Err(FpError::InvalidSupportFraction(_))
    ));
}

#[test]
fn append_accumulates_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.txt");

    append_report(&path, "first\n").unwrap();
    append_report(&path, "second\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}
