use std::fs;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use relp_num::{RationalBig, RB};

use ratlist::data::number_types::rational::Rational;
use ratlist::data::sequence::RationalSequence;
use ratlist::io::error::ImportError;
use ratlist::io::{export_report, export_traversal, import, import_into};
use ratlist::R;

use crate::report::{get_input_file_path, get_output_file_path};

fn to_relp(value: &Rational) -> RationalBig {
    RB!(value.numerator().to_i64().unwrap(), value.denominator().to_u64().unwrap())
}

fn rendered(sequence: &RationalSequence) -> Vec<String> {
    sequence.iter().map(ToString::to_string).collect()
}

#[test]
fn two_files() {
    let sequence = import([get_input_file_path("input01"), get_input_file_path("input02")]).unwrap();

    assert_eq!(rendered(&sequence), ["1/2", "3/1", "1/2"]);
    assert_eq!(sequence.sum(), R!(4, 1));
    assert_eq!(sequence.sum().to_f64(), 4.0);

    let output = get_output_file_path("two_files");
    export_report(&output, &sequence).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "4.0\n1/2\n1/2\n3/1\n");
    fs::remove_file(output).unwrap();
}

#[test]
fn malformed_tokens_are_skipped() {
    let mut sequence = RationalSequence::new();
    let skipped = import_into(&get_input_file_path("input03"), &mut sequence).unwrap();

    assert_eq!(skipped, 3);
    assert_eq!(rendered(&sequence), ["1/6", "-2/1"]);
}

#[test]
fn report_then_append() {
    let output = get_output_file_path("report_then_append");
    fs::write(&output, "previous contents\n").unwrap();

    let sequence = import(["input01", "input02", "input03"].map(get_input_file_path)).unwrap();
    assert_eq!(sequence.len(), 5);
    assert_eq!(sequence.sum(), R!(13, 6));
    export_report(&output, &sequence).unwrap();

    let mut second = RationalSequence::new();
    for text in ["1/3", "2/5", "4/5", "5/7"] {
        second.append(Rational::parse(text).unwrap());
    }
    export_traversal(&output, &second).unwrap();

    let lines = fs::read_to_string(&output).unwrap();
    assert_eq!(
        lines.lines().collect::<Vec<_>>(),
        [
            "2.1666666666666665",
            "1/6", "1/2", "1/2", "3/1", "-2/1",
            "5/7", "4/5", "2/5", "1/3",
        ],
    );
    fs::remove_file(output).unwrap();
}

#[test]
fn sum_is_exact() {
    let sequence = import(["input01", "input02", "input03"].map(get_input_file_path)).unwrap();

    let expected = sequence.iter()
        .fold(RB!(0), |total, value| total + to_relp(value));
    assert_eq!(to_relp(&sequence.sum()), expected);
}

#[test]
fn values_beyond_64_bits() {
    let sequence = import([get_input_file_path("input04")]).unwrap();
    assert_eq!(sequence.len(), 5);

    let sum = sequence.sum();
    assert_eq!(
        sum.to_string(),
        "7922816529972272113489497601755340233518208784855/79228165299722721134894976017",
    );
    assert_eq!(sum.numerator() % sum.denominator(), BigInt::from(55_340_233_518_208_784_855_u128));

    let output = get_output_file_path("values_beyond_64_bits");
    export_report(&output, &sequence).unwrap();
    let report = fs::read_to_string(&output).unwrap();
    assert_eq!(
        report.lines().skip(1).collect::<Vec<_>>(),
        ["1/4294967371", "1/4294967357", "1/4294967311", "99999999999999999999/1", "1/1"],
    );
    let float = report.lines().next().unwrap().parse::<f64>().unwrap();
    assert!((float - 1e20).abs() < 1e5);
    fs::remove_file(output).unwrap();
}

#[test]
fn missing_file() {
    let missing = get_input_file_path("does_not_exist");
    let result = import([get_input_file_path("input01"), missing.clone()]);

    match result {
        Err(ImportError::Io { path, .. }) => assert_eq!(path, missing),
        Ok(_) => panic!("reading a missing file should fail"),
    }
}

#[test]
fn append_creates_file() {
    let output = get_output_file_path("append_creates_file");
    let _ = fs::remove_file(&output);

    let sequence = RationalSequence::from(vec![R!(1, 2), R!(1, 3)]);
    export_traversal(&output, &sequence).unwrap();
    export_traversal(&output, &sequence).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "1/3\n1/2\n1/3\n1/2\n");
    fs::remove_file(output).unwrap();
}
