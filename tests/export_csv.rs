// tests/export_csv.rs
use std::fs;

use cert_view::config::options::{ExportFormat, ExportOptions, Quoting};
use cert_view::{Certificate, CertificateViewModel};

fn cert(id: i64, first: &str, last: &str) -> Certificate {
    Certificate {
        id,
        first_name: first.into(),
        last_name: last.into(),
        from_date: "2024-01-05".into(),
        tom_date: "2024-06-01".into(),
        created_at: "2024-01-01".into(),
    }
}

fn loaded(certs: Vec<Certificate>) -> CertificateViewModel {
    let mut vm = CertificateViewModel::new();
    vm.apply_load(Ok(certs));
    vm
}

#[test]
fn ann_lee_scenario() {
    let mut vm = loaded(vec![cert(1, "Ann", "Lee")]);
    let dir = tempfile::tempdir().unwrap();

    let path = vm.export_csv(dir.path(), Quoting::Never).unwrap();
    assert_eq!(path.file_name().unwrap(), "student_certificates.csv");

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ID,First Name,Last Name,From Date,To Date,Created At");
    assert_eq!(lines[1], "1,Ann,Lee,Jan 5, 2024,Jun 1, 2024,Jan 1, 2024");
}

#[test]
fn row_count_ignores_search_term() {
    let mut vm = loaded(vec![cert(1, "Ann", "Lee"), cert(2, "Bob", "Stone"), cert(3, "Cy", "Twombly")]);
    vm.set_search_term("zzz");
    assert!(vm.filtered().is_empty());

    let text = vm.csv_text(Quoting::Never);
    assert_eq!(text.lines().count(), 3 + 1);
    assert!(text.contains("Bob,Stone"));
}

#[test]
fn empty_set_exports_header_only() {
    let vm = loaded(Vec::new());
    assert_eq!(
        vm.csv_text(Quoting::Never),
        "ID,First Name,Last Name,From Date,To Date,Created At\n"
    );
}

#[test]
fn commas_in_names_are_not_escaped_by_default() {
    let vm = loaded(vec![cert(7, "Jr, Ann", "Lee")]);
    let text = vm.csv_text(Quoting::Never);
    assert_eq!(text.lines().nth(1), Some("7,Jr, Ann,Lee,Jan 5, 2024,Jun 1, 2024,Jan 1, 2024"));
}

#[test]
fn quoting_needed_escapes_names_and_dates() {
    let vm = loaded(vec![cert(7, "Jr, Ann", "O\"Lee")]);
    let text = vm.csv_text(Quoting::Needed);
    assert_eq!(
        text.lines().nth(1),
        Some("7,\"Jr, Ann\",\"O\"\"Lee\",\"Jan 5, 2024\",\"Jun 1, 2024\",\"Jan 1, 2024\"")
    );
}

#[test]
fn export_closes_menu_and_honours_options() {
    let mut vm = loaded(vec![cert(1, "Ann", "Lee")]);
    vm.toggle_menu();
    assert!(vm.menu_open());

    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_out_dir(&dir.path().join("nested").to_string_lossy());
    export.quoting = Quoting::Needed;

    let now = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
    let path = vm.export(&export, ExportFormat::Csv, now).unwrap();

    assert!(!vm.menu_open());
    assert_eq!(path, dir.path().join("nested").join("student_certificates.csv"));
    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("\"Jan 5, 2024\""));
}

#[test]
fn export_into_a_file_path_fails() {
    let mut vm = loaded(vec![cert(1, "Ann", "Lee")]);
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"x").unwrap();

    let err = vm.export_csv(&blocker, Quoting::Never).unwrap_err();
    assert!(matches!(err, cert_view::ExportError::NotADirectory(_)));
}
