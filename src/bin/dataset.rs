//! Command line tool to load and summarize a news corpus

use anyhow::anyhow;
use burn::{config::Config as _, data::dataset::Dataset as _};
use news_classification::{
    cli::datasets::Dataset,
    datasets::{self, vntc, Encoding, Labels, Split, UnknownLabelPolicy},
};
use pico_args::Arguments;

const HELP: &str = "\
Usage: dataset DATASET [OPTIONS]

Arguments:
  DATASET              The dataset to use (e.g., 'vntc')

Options:
  -h, --help           Print help
  -c, --config         A JSON corpus config file
  -d, --data-dir       The path to the top-level data directory (defaults to 'data')
  -e, --encoding       The document encoding (defaults to 'utf-16')
  -s, --samples        Number of random training samples to print (defaults to 3)
  --skip-unknown       Skip test documents whose label is missing from the training split
";

#[derive(Debug)]
struct Args {
    dataset: String,
    config: Option<String>,
    data_dir: Option<String>,
    encoding: Option<String>,
    samples: usize,
    skip_unknown: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            config: pargs.opt_value_from_str(["-c", "--config"])?,
            data_dir: pargs.opt_value_from_str(["-d", "--data-dir"])?,
            encoding: pargs.opt_value_from_str(["-e", "--encoding"])?,
            samples: pargs.opt_value_from_str(["-s", "--samples"])?.unwrap_or(3),
            skip_unknown: pargs.contains("--skip-unknown"),
            dataset: pargs.free_from_str().map_err(|e| match e {
                pico_args::Error::MissingArgument => anyhow!("Missing required argument: DATASET"),
                _ => anyhow!("{}", e),
            })?,
        };

        Ok(Some(args))
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let dataset = Dataset::try_from(args.dataset.as_str())?;

    let mut config = match &args.config {
        Some(path) => datasets::Config::load(path)
            .map_err(|e| anyhow!("Unable to load corpus config file: {}", e))?,
        None => datasets::Config::new(),
    };

    if let Some(data_dir) = &args.data_dir {
        config.data_dir = data_dir.to_string();
    }

    if let Some(encoding) = &args.encoding {
        config.encoding = Encoding::try_from(encoding.as_str()).map_err(|e| anyhow!(e))?;
    }

    if args.skip_unknown {
        config.unknown_labels = UnknownLabelPolicy::Skip;
    }

    match dataset {
        Dataset::Vntc => summarize(&config, args.samples),
    }
}

fn summarize(config: &datasets::Config, samples: usize) -> anyhow::Result<()> {
    let labels = Labels::discover(config.train_root())?;

    let train = vntc::Dataset::load(config, &labels, Split::Train)?;
    let test = vntc::Dataset::load(config, &labels, Split::Test)?;

    println!("=== {} ===", vntc::DATASET);
    println!("- Labels: {}", labels.len());
    println!("- Train: {} documents", train.len());
    println!("- Test: {} documents", test.len());

    let test_counts = test.label_counts();
    for (label, count) in train.label_counts() {
        let id = labels.id(&label).unwrap_or_default();
        let test_count = test_counts.get(&label).copied().unwrap_or_default();

        println!("  [{id:>2}] {label}: {count} train / {test_count} test");
    }

    for (i, (text, label)) in train.get_samples(samples).into_iter().enumerate() {
        let preview: String = text.chars().take(120).collect();

        println!(
            "\n=== Sample {i} ===\
             \n- Label: {label}\
             \n- Text: {}\
             \n================",
            preview.trim()
        );
    }

    Ok(())
}
