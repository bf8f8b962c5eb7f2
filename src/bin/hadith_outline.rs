//! Extract the outline of a Shamela HTML export into JSON.
//!
//! Usage:
//!   hadith-outline 001.htm
//!   hadith-outline 001.htm -o out/bukhari.json
//!   hadith-outline 001.htm --stdout | jq '.kitaabs | length'
//!
//! Progress lines go to stdout (stderr with `--stdout`). Set `RUST_LOG` to
//! override the level chosen by `--verbose`.

use clap::Parser;
use hadith_outline::{OutlineConfig, OutlinePipeline};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hadith-outline",
    version,
    about = "Extract the kitaab / baab / hadith outline of an HTML export as JSON"
)]
struct Cli {
    /// Input HTML document
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "hadith_structure.json")]
    output: PathBuf,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Class of the page container elements
    #[arg(long, default_value = "PageText")]
    page_class: String,

    /// Value of the data-type attribute that marks titles
    #[arg(long, default_value = "title")]
    title_value: String,

    /// Log every opened and closed unit
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    let target = if cli.stdout {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(target)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> hadith_outline::Result<()> {
    let config = OutlineConfig::new()
        .with_page_class(&cli.page_class)
        .with_title_marker("data-type", &cli.title_value);
    let outline = OutlinePipeline::new(config).extract_file(&cli.input)?;

    if cli.stdout {
        let json = outline.document.to_json()?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    outline.save_json(&cli.output)?;

    let stats = outline.document.stats();
    println!(
        "Saved {} kitaabs, {} baabs, {} sub-baabs, {} hadiths to {}",
        stats.kitaabs,
        stats.baabs,
        stats.sub_baabs,
        stats.hadiths,
        cli.output.display()
    );
    if !outline.diagnostics.is_empty() {
        println!("{} warnings (run with --verbose for details)", outline.diagnostics.len());
    }

    Ok(())
}
