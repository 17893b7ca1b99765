use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use letter_recognition_csv::conversion::{ConversionOptions, convert_from_path};
use letter_recognition_csv::ingestion::{ingest_csv_from_path, ingest_csv_from_reader};
use letter_recognition_csv::processing::{CLASS_COUNT, encode_dataset, train_test_split};
use letter_recognition_csv::types::{DataType, Field, Schema, Value};

fn tmp_file(name: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("letter-recognition-csv-ingest-{name}-{nanos}.{ext}"))
}

fn reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes())
}

#[test]
fn ingest_csv_from_path_happy_path() {
    let schema = Schema::letter_recognition();
    let ds = ingest_csv_from_path("tests/fixtures/letter-sample.csv", &schema).unwrap();

    assert_eq!(ds.row_count(), 6);
    assert_eq!(ds.rows[0][0], Value::Float64(2.0));
    assert_eq!(ds.rows[0][6], Value::Float64(13.0));
    assert_eq!(ds.rows[0][16], Value::Utf8("T".to_string()));

    let letters: Vec<&Value> = ds.column("letter").unwrap().collect();
    assert_eq!(letters.len(), 6);
    assert_eq!(letters[5], &Value::Utf8("S".to_string()));
}

#[test]
fn converted_file_loads_back() {
    let output = tmp_file("roundtrip", "csv");
    convert_from_path("tests/fixtures/letter-sample.data", &output, &ConversionOptions::default()).unwrap();

    let ds = ingest_csv_from_path(&output, &Schema::letter_recognition()).unwrap();
    let expected = ingest_csv_from_path("tests/fixtures/letter-sample.csv", &Schema::letter_recognition()).unwrap();
    assert_eq!(ds, expected);
    fs::remove_file(&output).unwrap();
}

#[test]
fn ingest_csv_allows_reordered_columns() {
    let schema = Schema::new(vec![
        Field::new("onpix", DataType::Float64),
        Field::new("letter", DataType::Utf8),
    ]);
    let mut rdr = reader("letter,width,onpix\nK,3,9\n");

    let ds = ingest_csv_from_reader(&mut rdr, &schema).unwrap();
    assert_eq!(ds.rows, vec![vec![Value::Float64(9.0), Value::Utf8("K".to_string())]]);
}

#[test]
fn ingest_csv_skips_short_records() {
    let schema = Schema::new(vec![
        Field::new("onpix", DataType::Float64),
        Field::new("letter", DataType::Utf8),
    ]);
    let mut rdr = reader("onpix,letter\n4,A\n5\n6,C\n");

    let ds = ingest_csv_from_reader(&mut rdr, &schema).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows[1], vec![Value::Float64(6.0), Value::Utf8("C".to_string())]);
}

#[test]
fn ingest_csv_errors_on_missing_required_column() {
    let mut rdr = reader("x-box,y-box\n1,2\n");

    let err = ingest_csv_from_reader(&mut rdr, &Schema::letter_recognition()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains(r#"missing required columns ["width", "high", "onpix""#));
    assert!(msg.contains(r#""yegvx", "letter"]"#));
}

#[test]
fn ingest_csv_errors_on_type_parse() {
    let schema = Schema::new(vec![
        Field::new("onpix", DataType::Float64),
        Field::new("letter", DataType::Utf8),
    ]);
    let mut rdr = reader("onpix,letter\n1,A\nnot_a_number,B\n");

    let err = ingest_csv_from_reader(&mut rdr, &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value at row 3"));
    assert!(msg.contains("column 'onpix'"));
}

#[test]
fn loaded_fixture_encodes_and_splits() {
    let ds = ingest_csv_from_path("tests/fixtures/letter-sample.csv", &Schema::letter_recognition()).unwrap();
    let samples = encode_dataset(&ds).unwrap();

    assert_eq!(samples.len(), 6);
    let first = &samples[0];
    assert_eq!(first.label, 'T');
    assert_eq!(first.inputs.len(), 16);
    assert_eq!(first.inputs[6], 13.0 / 15.0);
    assert_eq!(first.target.len(), CLASS_COUNT);
    assert_eq!(first.target[(b'T' - b'A') as usize], 1.0);
    assert!(samples.iter().flat_map(|s| s.inputs.iter()).all(|v| (0.0..=1.0).contains(v)));

    let (train, test) = train_test_split(&samples, 0.8, 7);
    assert_eq!(train.len(), 4);
    assert_eq!(test.len(), 2);
}
