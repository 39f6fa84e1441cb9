// Command-line advice lookup
//
// Usage: cargo run --bin advise -- --lang hi --crop wheat --soil black \
//            --season rabi --water medium --farm-size small --format markdown

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use farming_advisor::{
    Advisor, HtmlFormatter, JsonFormatter, LanguageCode, MarkdownFormatter,
    SelectionForm,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Html,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "advise", about = "Print localized farming advice for a set of selections")]
struct Cli {
    /// Display language (en, hi, gu, mr, ta)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Crop id, e.g. wheat or rice
    #[arg(long)]
    crop: Option<String>,

    /// black, red, sandy or clay
    #[arg(long)]
    soil: Option<String>,

    /// kharif, rabi or zaid
    #[arg(long)]
    season: Option<String>,

    /// low, medium or high
    #[arg(long)]
    water: Option<String>,

    /// small, medium or large
    #[arg(long = "farm-size")]
    farm_size: Option<String>,

    #[arg(long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Directory with translations.json and advisory.json instead of the bundled tables
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farming_advisor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let lang: LanguageCode = cli.lang.parse()?;

    let advisor = match &cli.data_dir {
        Some(dir) => Advisor::from_dir(dir)
            .with_context(|| format!("loading tables from {}", dir.display()))?,
        None => Advisor::bundled().context("loading bundled tables")?,
    };

    let form = SelectionForm {
        crop: cli.crop,
        soil: cli.soil,
        season: cli.season,
        water: cli.water,
        farm_size: cli.farm_size,
    };

    if !form.is_complete() {
        eprintln!("{}", advisor.incomplete_message(lang));
    }
    let bundle = advisor.submit(&form, lang)?;

    let output = match cli.format {
        OutputFormat::Markdown => MarkdownFormatter::format(&bundle, &advisor.report_labels(lang)),
        OutputFormat::Html => {
            HtmlFormatter::format(&bundle, &advisor.report_labels(lang), lang.as_str())
                .context("rendering print page")?
        }
        OutputFormat::Json => JsonFormatter::format(&bundle).context("serializing advice")?,
    };

    println!("{}", output);
    Ok(())
}
