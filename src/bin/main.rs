use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

use ratlist::data::number_types::rational::Rational;
use ratlist::data::sequence::RationalSequence;
use ratlist::io::{export_report, export_traversal, import};

/// Sum fractions and integers read from text files, exactly.
#[derive(Parser, Debug)]
#[command(name = "ratlist", version, about, long_about = None)]
struct Opts {
    /// Files containing whitespace-separated values such as `3` or `2/5`
    #[arg(default_values = ["input01.txt", "input02.txt", "input03.txt"])]
    inputs: Vec<PathBuf>,

    /// File to write the sum and the sorted values to; overwritten
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Files whose values are appended to the output after the report, without a sum. Without
    /// any, the values 1/3, 2/5, 4/5 and 5/7 are appended
    #[arg(short, long = "append", value_name = "FILE")]
    append: Vec<PathBuf>,
}

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    let opts = Opts::parse();
    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<()> {
    let sequence = import(&opts.inputs)
        .context("couldn't read the input files")?;
    info!(values = sequence.len(), "inputs read");

    export_report(&opts.output, &sequence)
        .context("couldn't write the report")?;

    let appended = appended_sequence(&opts.append)?;
    export_traversal(&opts.output, &appended)
        .context("couldn't append to the report")?;

    Ok(())
}

/// Values written after the report: those of the given files, or the demonstration values.
fn appended_sequence(files: &[PathBuf]) -> Result<RationalSequence> {
    if files.is_empty() {
        demo_sequence()
    } else {
        import(files).context("couldn't read the files to append")
    }
}

fn demo_sequence() -> Result<RationalSequence> {
    ["1/3", "2/5", "4/5", "5/7"].into_iter()
        .map(|text| Rational::parse(text).with_context(|| format!("invalid demo value {}", text)))
        .collect()
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;

    use crate::{Opts, run};

    fn input_file_path(name: &str) -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "tests", "report", name].iter().collect()
    }

    #[test]
    fn demo_values_appended_by_default() {
        let output = std::env::temp_dir()
            .join(format!("ratlist-demo_values_appended_by_default-{}.txt", std::process::id()));
        let (input01, input02) = (input_file_path("input01.txt"), input_file_path("input02.txt"));

        let arguments = [PathBuf::from("ratlist"), "-o".into(), output.clone(), input01, input02];
        let opts = Opts::parse_from(arguments);
        assert!(opts.append.is_empty());
        run(opts).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "4.0\n1/2\n1/2\n3/1\n5/7\n4/5\n2/5\n1/3\n",
        );
        fs::remove_file(output).unwrap();
    }

    #[test]
    fn append_files_replace_demo_values() {
        let output = std::env::temp_dir()
            .join(format!("ratlist-append_files_replace_demo_values-{}.txt", std::process::id()));
        let (input01, input02) = (input_file_path("input01.txt"), input_file_path("input02.txt"));

        let arguments = [PathBuf::from("ratlist"), "-o".into(), output.clone(), "-a".into(), input02, input01];
        let opts = Opts::parse_from(arguments);
        run(opts).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "3.5\n1/2\n3/1\n1/2\n");
        fs::remove_file(output).unwrap();
    }
}
