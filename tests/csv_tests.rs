mod common;
use common::*;
use workhours::config::Taxonomy;
use workhours::export::csv::{UTF8_BOM, with_bom};
use workhours::export::{escape_field, generate_csv};
use workhours::import::{
    HeaderRule, ImportError, ImportLogic, ImportSummary, parse_csv_line, split_records,
};
use workhours::models::Entry;

/// Turn exported rows into an importable file: prepend a date column and use
/// a header the import rule accepts.
fn as_import_file(exported: &str, date: &str) -> String {
    let mut lines = exported.split_inclusive('\n');
    lines.next(); // export header
    let body: String = lines.collect();

    let mut out = format!("{IMPORT_HEADER}\n");
    for record in split_records(body.trim_end()) {
        out.push_str(&format!("{date},{record}\n"));
    }
    out
}

fn tuples(entries: &[&Entry]) -> Vec<(String, String, f64, String)> {
    entries
        .iter()
        .map(|e| {
            (
                e.category().to_string(),
                e.subcategory().to_string(),
                e.hours(),
                e.memo().to_string(),
            )
        })
        .collect()
}

#[test]
fn test_escape_field_rules() {
    assert_eq!(escape_field("plain"), "plain");
    assert_eq!(escape_field(""), "");
    assert_eq!(escape_field("a,b"), "\"a,b\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    // only comma, newline and quote trigger quoting
    assert_eq!(escape_field(" padded "), " padded ");
    assert_eq!(escape_field("tab\there"), "tab\there");
}

#[test]
fn test_generate_csv_empty_is_none() {
    assert!(generate_csv(&[], None).is_none());
    assert!(generate_csv(&[], Some("2025-09-15")).is_none());
}

#[test]
fn test_generate_csv_layout() {
    let mut store = memory_store();
    store.add(fields(APP, AUDIO, "2.5", "a,b"));
    store.add(fields(KERNEL, DEVICE, "2", ""));

    let week = store.get_this_week();
    let csv = generate_csv(&week, Some("2025-09-15")).unwrap();

    assert_eq!(
        csv,
        "2025-09-15\n\
         技術分野,小分類,作業時間(h),メモ\n\
         Linuxアプリ,オーディオ処理,2.5,\"a,b\"\n\
         Linuxカーネル,デバイス制御,2,\n"
    );

    let no_week = generate_csv(&week, None).unwrap();
    assert!(no_week.starts_with("技術分野,小分類,作業時間(h),メモ\n"));
}

#[test]
fn test_bom_prefix() {
    let out = with_bom("x\n");
    assert!(out.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));
    assert_eq!(out.strip_prefix(UTF8_BOM), Some("x\n"));
}

#[test]
fn test_parse_csv_line_quotes() {
    assert_eq!(parse_csv_line("a,b,,c"), vec!["a", "b", "", "c"]);
    assert_eq!(parse_csv_line("\"a,b\",c"), vec!["a,b", "c"]);
    assert_eq!(parse_csv_line("\"say \"\"hi\"\"\",x"), vec!["say \"hi\"", "x"]);
    // quotes toggle anywhere, not only at field start
    assert_eq!(parse_csv_line("ab\"c,d\"e,f"), vec!["abc,de", "f"]);
    assert_eq!(parse_csv_line(""), vec![""]);
}

#[test]
fn test_split_records_keeps_quoted_newlines() {
    assert_eq!(split_records("a\nb\nc"), vec!["a", "b", "c"]);
    assert_eq!(
        split_records("h\n1,\"x\ny\"\n2,z"),
        vec!["h", "1,\"x\ny\"", "2,z"]
    );
}

#[test]
fn test_header_rule_is_substring_containment() {
    let rule = HeaderRule::IMPORT;
    assert!(rule.accepts(IMPORT_HEADER));
    assert!(rule.accepts("メモ,作業時間,技術分野,日付"));
    assert!(rule.accepts("日付技術分野作業時間"));
    assert!(!rule.accepts("技術分野,小分類,作業時間(h),メモ"));
    assert_eq!(rule.missing("技術分野,小分類"), vec!["日付", "作業時間"]);
}

#[test]
fn test_import_valid_rows() {
    let mut store = memory_store();
    let text = format!(
        "{IMPORT_HEADER}\n\
         2025-01-06,{APP},{AUDIO},1.5,first\n\
         2025-01-07,{KERNEL},{DEVICE},3,\"with, comma\"\n"
    );

    let summary =
        ImportLogic::parse_and_import_csv(&mut store, &Taxonomy::default(), &text).unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            imported: 2,
            skipped: 0
        }
    );

    // imported into the selected week, not the row date
    let week = store.get_this_week();
    assert_eq!(week.len(), 2);
    assert!(week.iter().all(|e| e.week_start_date() == "2025-09-15"));
    assert_eq!(week[1].memo(), "with, comma");
}

#[test]
fn test_import_counts_invalid_rows_as_skipped() {
    let mut store = memory_store();
    let text = format!(
        "{IMPORT_HEADER}\n\
         2025-01-06,{APP},{AUDIO},1,ok\n\
         2025-01-06,Unknown,{AUDIO},1,bad category\n\
         2025-01-06,{KERNEL},{DEVICE},2,ok too\n"
    );

    let summary =
        ImportLogic::parse_and_import_csv(&mut store, &Taxonomy::default(), &text).unwrap();
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.to_string(), "2 entries imported (1 skipped)");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_import_row_validation_rules() {
    let mut store = memory_store();
    let text = format!(
        "{IMPORT_HEADER}\n\
         2025/01/06,{APP},{AUDIO},1,bad date\n\
         2025-01-06,{APP},{DEVICE},1,wrong subcategory\n\
         2025-01-06,{APP},{AUDIO},0,zero hours\n\
         2025-01-06,{APP},{AUDIO},-2,negative\n\
         2025-01-06,{APP},{AUDIO},abc,not a number\n\
         2025-01-06,{APP},{AUDIO},1\n\
         \n\
         2025-01-06,{APP},{AUDIO},0.25,\n"
    );

    let summary =
        ImportLogic::parse_and_import_csv(&mut store, &Taxonomy::default(), &text).unwrap();
    // short row is ignored, blank line too
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 5);
    assert_eq!(store.get_all()[0].hours(), 0.25);
    assert_eq!(store.get_all()[0].memo(), "");
}

#[test]
fn test_import_bad_header_adds_nothing() {
    let mut store = memory_store();
    let text = format!("技術分野,小分類,作業時間(h),メモ\n2025-01-06,{APP},{AUDIO},1,x\n");

    let err =
        ImportLogic::parse_and_import_csv(&mut store, &Taxonomy::default(), &text).unwrap_err();
    assert!(matches!(err, ImportError::BadHeader { .. }));
    assert!(store.is_empty());
}

#[test]
fn test_import_empty_and_no_valid_rows() {
    let mut store = memory_store();
    let tax = Taxonomy::default();

    assert_eq!(
        ImportLogic::parse_and_import_csv(&mut store, &tax, ""),
        Err(ImportError::Empty)
    );
    assert_eq!(
        ImportLogic::parse_and_import_csv(&mut store, &tax, &format!("  {IMPORT_HEADER}  \n\n")),
        Err(ImportError::Empty)
    );

    let all_bad = format!("{IMPORT_HEADER}\n2025-01-06,Nope,{AUDIO},1,x\n");
    assert_eq!(
        ImportLogic::parse_and_import_csv(&mut store, &tax, &all_bad),
        Err(ImportError::NoValidRows { skipped: 1 })
    );
    assert!(store.is_empty());
}

#[test]
fn test_import_handles_bom_and_crlf() {
    let mut store = memory_store();
    let text = format!("{UTF8_BOM}{IMPORT_HEADER}\r\n2025-01-06,{APP},{AUDIO},2,memo\r\n");

    let summary =
        ImportLogic::parse_and_import_csv(&mut store, &Taxonomy::default(), &text).unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(store.get_all()[0].memo(), "memo");
}

#[test]
fn test_export_import_roundtrip_example() {
    let mut source = memory_store();
    source.add(fields(APP, AUDIO, "2.5", "a,b"));

    let exported = generate_csv(&source.get_all(), None).unwrap();
    let file = as_import_file(&exported, "2025-09-15");

    let mut target = memory_store();
    ImportLogic::parse_and_import_csv(&mut target, &Taxonomy::default(), &file).unwrap();

    let all = target.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].hours(), 2.5);
    assert_eq!(all[0].memo(), "a,b");
}

#[test]
fn test_export_import_roundtrip_tricky_memos() {
    let mut source = memory_store();
    source.add(fields(APP, AUDIO, "2.5", "a,b"));
    source.add(fields(APP, IPC, "1", "said \"ok\", then left"));
    source.add(fields(KERNEL, DEVICE, "0.75", "line one\nline two"));
    source.add(fields(KERNEL, DEVICE, "8", ""));
    source.add(fields(APP, AUDIO, "3", "\"\""));

    let original = source.get_this_week();
    let exported = generate_csv(&original, None).unwrap();
    let file = as_import_file(&exported, "2025-09-15");

    let mut target = memory_store();
    let summary =
        ImportLogic::parse_and_import_csv(&mut target, &Taxonomy::default(), &file).unwrap();
    assert_eq!(summary.imported, 5);
    assert_eq!(summary.skipped, 0);

    assert_eq!(tuples(&target.get_this_week()), tuples(&original));
}

#[test]
fn test_weekly_export_file_is_not_importable_as_is() {
    // first line is the week date, so the header rule fails
    let mut store = memory_store();
    store.add(fields(APP, AUDIO, "1", ""));
    let csv = generate_csv(&store.get_this_week(), Some("2025-09-15")).unwrap();

    let mut target = memory_store();
    let err = ImportLogic::parse_and_import_csv(&mut target, &Taxonomy::default(), &csv)
        .unwrap_err();
    assert!(matches!(err, ImportError::BadHeader { .. }));
}

#[test]
fn test_import_reports_unwritable_store() {
    let mut store = read_only_store();
    let text = format!("{IMPORT_HEADER}\n2025-01-06,{APP},{AUDIO},1,x\n");

    assert_eq!(
        ImportLogic::parse_and_import_csv(&mut store, &Taxonomy::default(), &text),
        Err(ImportError::NotPersisted { imported: 1 })
    );
}
