//! Command-line converter: one Peppol UBL XML file in, one HTML file out.

use clap::Parser;
use pepview::{Converter, LanguageCode, XsltprocEngine, locate_stylesheet};
use std::error::Error;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "pepview", version, about = "Peppol Invoice/Credit Note Viewer")]
struct Cli {
    /// Path to the UBL Invoice or Credit Note XML file.
    input: Option<PathBuf>,

    /// Where to write the HTML (defaults to the input path with an .html
    /// extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language code bound into the stylesheet (shipped translations:
    /// en, is, pl, se, sr; other codes pass through unvalidated).
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Explicit stylesheet path. Without it, a Stylesheets directory is
    /// probed next to the executable, then under the working directory.
    #[arg(short, long, env = "PEPVIEW_STYLESHEET")]
    stylesheet: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    println!("Peppol Invoice/Credit Note Viewer");
    println!("==================================");

    let stylesheet = locate_stylesheet(cli.stylesheet.as_deref());
    println!("Stylesheet: {}", stylesheet.display());

    // No argument, or a path that does not exist: print usage and perform
    // no transform.
    let Some(input) = cli.input.as_deref().filter(|path| path.is_file()) else {
        if let Some(missing) = cli.input.as_deref() {
            println!("Input file not found: {}", missing.display());
        }
        println!();
        println!("Usage: pepview <path-to-xml-file>");
        println!("Example: pepview c8d0172f-9c79-4f81-acf3-666d5e69d942.xml");
        println!("See pepview --help for options.");
        return;
    };

    let engine = match XsltprocEngine::discover() {
        Ok(engine) => engine,
        Err(err) => {
            report_failure(&err);
            process::exit(1);
        }
    };

    let converter = Converter::new(Box::new(engine), stylesheet)
        .with_language(LanguageCode::new(&cli.lang));

    let result = match cli.output {
        Some(output) => converter.convert_file_to(input, &output).map(|_| output),
        None => converter.convert_file(input),
    };

    match result {
        Ok(output) => {
            println!("Successfully converted: {}", input.display());
            println!("Output saved to: {}", output.display());
        }
        Err(err) => {
            report_failure(&err);
            process::exit(1);
        }
    }
}

/// Prints the failure plus up to two levels of nested cause.
fn report_failure(err: &dyn Error) {
    eprintln!("Error converting file: {err}");
    let mut cause = err.source();
    for _ in 0..2 {
        let Some(inner) = cause else { break };
        eprintln!("  caused by: {inner}");
        cause = inner.source();
    }
}
