//! End-to-end processing of well-formed and partly malformed exports

use super::write_export;
use crate::config::AnalyzerConfig;
use crate::diagnostics::{CollectingSink, Diagnostic};
use crate::processor::LogProcessor;
use std::fs;

#[test]
fn test_single_variable_min_max() {
    let (temp_dir, input) = write_export(
        "A1.TXT",
        "-VARIABLES-\n\
         1=100\n\
         -VALUES-\n\
         @1:5.5;0;01.01.2024 10:00:00.000\n\
         @1:2.2;0;01.01.2024 11:00:00.000\n\
         @1:9.9;0;01.01.2024 12:00:00.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let (summary, sink) = processor.process_with_sink(CollectingSink::new()).unwrap();

    assert!(sink.is_empty());
    assert_eq!(summary.output_path, temp_dir.path().join("A1_stats.txt"));
    assert_eq!(summary.variables_written, 1);

    let output = fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(
        output,
        "100;2.2;01.01.2024 11:00:00.000;9.9;01.01.2024 12:00:00.000\n"
    );
}

#[test]
fn test_output_sorted_by_variable_id() {
    let (_temp_dir, input) = write_export(
        "plant.log",
        "-VARIABLES-\n\
         @a=30\n\
         @b=4\n\
         @c=12\n\
         -VALUES-\n\
         @a:1.0;0;01.01.2024 10:00:00.000\n\
         @c:7.0;0;01.01.2024 10:00:01.000\n\
         @b:3.0;0;01.01.2024 10:00:02.000\n\
         @a:-2.0;0;01.01.2024 10:00:03.000\n\
         @c:6.5;0;01.01.2024 10:00:04.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let summary = processor.process().unwrap();

    let output = fs::read_to_string(&summary.output_path).unwrap();
    let ids: Vec<i32> = output
        .lines()
        .map(|line| line.split(';').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 12, 30]);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines[0],
        "4;3;01.01.2024 10:00:02.000;3;01.01.2024 10:00:02.000"
    );
    assert_eq!(
        lines[1],
        "12;6.5;01.01.2024 10:00:04.000;7;01.01.2024 10:00:01.000"
    );
    assert_eq!(
        lines[2],
        "30;-2;01.01.2024 10:00:03.000;1;01.01.2024 10:00:00.000"
    );
}

#[test]
fn test_malformed_mapping_leaves_channel_unmapped() {
    let (_temp_dir, input) = write_export(
        "bad_mapping.txt",
        "-VARIABLES-\n1-100\n-VALUES-\n@1:5.5;0;01.01.2024 10:00:00.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let (outcome, sink) = processor.analyze(CollectingSink::new()).unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.mappings_recorded, 0);

    let diagnostics = sink.into_diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(matches!(diagnostics[0], Diagnostic::MalformedMapping { .. }));
    assert!(matches!(diagnostics[1], Diagnostic::UnknownChannel { .. }));
}

#[test]
fn test_unparsable_value_creates_no_record() {
    let (_temp_dir, input) = write_export(
        "bad_value.txt",
        "-VARIABLES-\n@1=100\n-VALUES-\n@1:abc;0;01.01.2024 10:00:00.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let (summary, sink) = processor.process_with_sink(CollectingSink::new()).unwrap();

    assert_eq!(summary.variables_written, 0);
    assert_eq!(summary.stats.lines_skipped, 1);
    assert!(matches!(
        sink.diagnostics()[0],
        Diagnostic::InvalidValue { line_number: 4, .. }
    ));
    assert_eq!(fs::read_to_string(&summary.output_path).unwrap(), "");
}

#[test]
fn test_unparsable_value_for_bare_channel_mapping() {
    let (_temp_dir, input) = write_export(
        "bad_value_bare.txt",
        "-VARIABLES-\n1=100\n-VALUES-\n@1:abc;0;01.01.2024 10:00:00.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let (summary, sink) = processor.process_with_sink(CollectingSink::new()).unwrap();

    // "@1" resolves to mapping "1", so the failure is the value, not the channel
    assert_eq!(sink.len(), 1);
    assert!(matches!(
        sink.diagnostics()[0],
        Diagnostic::InvalidValue { line_number: 4, .. }
    ));
    assert_eq!(summary.variables_written, 0);
    assert_eq!(fs::read_to_string(&summary.output_path).unwrap(), "");
}

#[test]
fn test_mapping_after_value_does_not_apply_retroactively() {
    let (_temp_dir, input) = write_export(
        "late_mapping.txt",
        "-VALUES-\n\
         @1:1.0;0;01.01.2024 10:00:00.000\n\
         -VARIABLES-\n\
         @1=100\n\
         -VALUES-\n\
         @1:4.0;0;01.01.2024 10:00:01.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let (summary, sink) = processor.process_with_sink(CollectingSink::new()).unwrap();

    assert_eq!(sink.len(), 1);
    assert!(matches!(
        sink.diagnostics()[0],
        Diagnostic::UnknownChannel { line_number: 2, .. }
    ));

    let output = fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(
        output,
        "100;4;01.01.2024 10:00:01.000;4;01.01.2024 10:00:01.000\n"
    );
}

#[test]
fn test_remapped_channel_feeds_new_variable() {
    let (_temp_dir, input) = write_export(
        "remap.txt",
        "-VARIABLES-\n\
         @1=10\n\
         -VALUES-\n\
         @1:1.0;0;01.01.2024 10:00:00.000\n\
         -VARIABLES-\n\
         @1=20\n\
         -VALUES-\n\
         @1:2.0;0;01.01.2024 10:00:01.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let summary = processor.process().unwrap();

    let output = fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(
        output,
        "10;1;01.01.2024 10:00:00.000;1;01.01.2024 10:00:00.000\n\
         20;2;01.01.2024 10:00:01.000;2;01.01.2024 10:00:01.000\n"
    );
}

#[test]
fn test_channels_sharing_a_variable_aggregate_together() {
    let (_temp_dir, input) = write_export(
        "shared.txt",
        "-VARIABLES-\n\
         @1=7\n\
         @2=7\n\
         -VALUES-\n\
         @1:5.0;0;01.01.2024 10:00:00.000\n\
         @2:-5.0;0;01.01.2024 10:00:01.000\n\
         @2:50.0;0;01.01.2024 10:00:02.000\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let summary = processor.process().unwrap();

    let output = fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(
        output,
        "7;-5;01.01.2024 10:00:01.000;50;01.01.2024 10:00:02.000\n"
    );
}

#[test]
fn test_blank_lines_and_whitespace_tolerated() {
    let (_temp_dir, input) = write_export(
        "spaced.txt",
        "\n   \n  -VARIABLES-  \n\n\t1 = 100\t\n\n -VALUES- \n\n  @1:3.25;0;15.06.2024 08:30:00.125  \n\n",
    );

    let processor = LogProcessor::new(&input, AnalyzerConfig::default()).unwrap();
    let (summary, sink) = processor.process_with_sink(CollectingSink::new()).unwrap();

    assert!(sink.is_empty());
    assert_eq!(summary.stats.blank_lines, 6);
    assert_eq!(summary.stats.section_headers, 2);

    let output = fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(
        output,
        "100;3.25;15.06.2024 08:30:00.125;3.25;15.06.2024 08:30:00.125\n"
    );
}

#[test]
fn test_explicit_output_path() {
    let (temp_dir, input) = write_export(
        "A2.TXT",
        "-VARIABLES-\n1=1\n-VALUES-\n1:1.5;0;01.01.2024 10:00:00.000\n",
    );
    let output_path = temp_dir.path().join("custom.csv");

    let config = AnalyzerConfig::default().with_output_path(Some(output_path.clone()));
    let processor = LogProcessor::new(&input, config).unwrap();
    let summary = processor.process().unwrap();

    assert_eq!(summary.output_path, output_path);
    assert!(output_path.exists());
    assert!(!temp_dir.path().join("A2_stats.txt").exists());
}

#[test]
fn test_state_is_not_shared_between_files() {
    let (_first_dir, first) = write_export(
        "first.txt",
        "-VARIABLES-\n@1=100\n-VALUES-\n@1:1.0;0;01.01.2024 10:00:00.000\n",
    );
    let (_second_dir, second) = write_export(
        "second.txt",
        "-VALUES-\n@1:2.0;0;01.01.2024 10:00:00.000\n",
    );

    LogProcessor::new(&first, AnalyzerConfig::default())
        .unwrap()
        .process()
        .unwrap();
    let (summary, sink) = LogProcessor::new(&second, AnalyzerConfig::default())
        .unwrap()
        .process_with_sink(CollectingSink::new())
        .unwrap();

    assert_eq!(summary.variables_written, 0);
    assert!(matches!(sink.diagnostics()[0], Diagnostic::UnknownChannel { .. }));
}
