use gridfill::alias_index::AliasIndex;
use gridfill::config::FillConfig;
use gridfill::error::FillError;
use gridfill::fill::FillEngine;
use gridfill::loader;
use gridfill::qa_index::QuestionAnswerIndex;
use std::fs;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("gridfill_test").join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_reference_with_missing_columns_is_synthesized() {
    let dir = test_dir("reference_missing_columns");
    let path = dir.join("master.csv");
    fs::write(&path, "Test Name ID,Potency\nT1,95%\n").unwrap();

    let table = loader::read_reference(&path).unwrap();
    assert!(table.columns().iter().any(|c| c == "alias"));
    assert!(table.columns().iter().any(|c| c == "product_name"));
    let record = &table.records()[0];
    assert_eq!(record.test_name_id, "T1");
    assert_eq!(record.attributes["potency"], "95%");
}

#[test]
fn test_mapping_with_one_row_is_fatal() {
    let dir = test_dir("mapping_one_row");
    let path = dir.join("qa.csv");
    fs::write(&path, "Potency?\n").unwrap();

    match loader::read_mapping(&path) {
        Err(FillError::Mapping(msg)) => assert!(msg.contains("two rows")),
        other => panic!("expected mapping error, got {other:?}"),
    }
}

#[test]
fn test_csv_round_trip_fill() {
    let dir = test_dir("round_trip");
    let master = dir.join("master.csv");
    let qa = dir.join("qa.csv");
    let target = dir.join("target.csv");
    let output = dir.join("target_FILLED.csv");

    fs::write(
        &master,
        "test_name_id,product_name,parameter,alias,potency\nT1,Widget,pH,,95%\n",
    )
    .unwrap();
    fs::write(&qa, "Potency?\npotency\n").unwrap();
    fs::write(&target, ",Potency?\npH,\n").unwrap();

    let table = loader::read_reference(&master).unwrap();
    let aliases = AliasIndex::build(&table);
    let (questions, answers) = loader::read_mapping(&qa).unwrap();
    let qa_index = QuestionAnswerIndex::build(&questions, &answers);
    let mut grid = loader::read_grid(&target).unwrap();

    let config = FillConfig {
        header_row: 0,
        data_start_row: 1,
        label_column: 0,
        data_start_column: 1,
        ..FillConfig::default()
    };
    let report = FillEngine::new(&config, &aliases, &qa_index).run(&mut grid);
    assert_eq!(report.filled_count, 1);

    loader::write_grid(&output, &grid).unwrap();
    let reread = loader::read_grid(&output).unwrap();
    assert_eq!(reread.cell(1, 1), "95%");
    assert_eq!(reread.cell(0, 1), "Potency?");
}
