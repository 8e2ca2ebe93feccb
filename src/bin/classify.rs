//! Command line front end for news classification

use std::io::{self, BufRead};

use anyhow::Result;
use news_classification::{
    cli::models::Model,
    pipelines::text_classification::{self, hosted, Classifier, Hosted},
};
use pico_args::Arguments;

const HELP: &str = "\
Usage: classify [OPTIONS] [TEXT]...

Arguments:
  TEXT                 The news text to classify (reads one text per stdin line when omitted)

Options:
  -h, --help           Print help
  -m, --model          The model to use (e.g., 'tnlanh99/phobert-news-classification')
  -c, --model-config   A local config.json to read class labels from, instead of the Hub
  --api-url            The base URL of the hosted inference API
  --json               Print scores as a JSON object

Environment:
  HF_TOKEN             Bearer token for the hosted inference API
  RUST_LOG             Log filter (e.g., 'info')
";

#[derive(Debug)]
struct Args {
    model: Option<String>,
    model_config: Option<String>,
    api_url: Option<String>,
    json: bool,
    text: Option<String>,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let model = pargs.opt_value_from_str(["-m", "--model"])?;
        let model_config = pargs.opt_value_from_str(["-c", "--model-config"])?;
        let api_url = pargs.opt_value_from_str("--api-url")?;
        let json = pargs.contains("--json");

        let words: Vec<String> = pargs
            .finish()
            .into_iter()
            .map(|word| word.to_string_lossy().into_owned())
            .collect();

        let text = if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        };

        Ok(Some(Args {
            model,
            model_config,
            api_url,
            json,
            text,
        }))
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let model = match &args.model {
        Some(model) => Model::try_from(model.as_str())?,
        None => Model::default(),
    };

    let config = match &args.model_config {
        Some(path) => text_classification::Config::from_pretrained_file(model.name(), path)?,
        None => text_classification::Config::from_hub(model.name())?,
    };

    log::info!(
        "Using {} with {} labels: {}",
        model,
        config.num_labels(),
        config.labels().join(", ")
    );

    let mut options = hosted::Options {
        api_token: std::env::var("HF_TOKEN").ok(),
        ..Default::default()
    };
    if let Some(api_url) = args.api_url.clone() {
        options.api_url = api_url;
    }

    let classifier = Hosted::new(model.name(), options);

    match &args.text {
        Some(text) => render(&classifier, &config, text, args.json),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }

                render(&classifier, &config, &line, args.json)?;
            }

            Ok(())
        }
    }
}

fn render(
    classifier: &dyn Classifier,
    config: &text_classification::Config,
    text: &str,
    json: bool,
) -> Result<()> {
    let scores = text_classification::classify(classifier, config, text)?;

    if json {
        println!("{}", serde_json::to_string(&scores.to_map())?);
    } else {
        println!("{}", scores);
    }

    Ok(())
}
