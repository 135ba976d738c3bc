use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use docublock_marker::{DEFAULT_DOC_ROOT, DOC_EXTENSION};
use generate_docs::config::source_from_env;
use generate_docs::{generate_docs, DocsConfig};

fn main() -> Result<()> {
    let matches = Command::new("generate_docs")
        .version("0.1.0")
        .about("Replaces @startDocuBlock markers in Markdown documents with blocks from the aggregated comments file")
        .arg(
            Arg::new("roots")
                .value_name("ROOT")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Documentation root(s) to scan [default: Documentation/Books/Users]"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .num_args(1)
                .help("Aggregated comments file [env: DOCUBLOCK_SOURCE] [default: allComments.txt]"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .num_args(1)
                .default_value(DOC_EXTENSION)
                .help("Extension of the documents to rewrite"),
        )
        .arg(
            Arg::new("reload_source")
                .long("reload-source")
                .help("Re-read the aggregated comments file for every marker")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let mut roots: Vec<PathBuf> = matches
        .get_many::<String>("roots")
        .unwrap_or_default()
        .map(PathBuf::from)
        .collect();
    if roots.is_empty() {
        roots.push(PathBuf::from(DEFAULT_DOC_ROOT));
    }

    let config = DocsConfig {
        roots,
        source: matches
            .get_one::<String>("source")
            .map(PathBuf::from)
            .unwrap_or_else(source_from_env),
        extension: matches
            .get_one::<String>("extension")
            .cloned()
            .unwrap_or_else(|| DOC_EXTENSION.to_string()),
        reload_source: matches.get_flag("reload_source"),
    };
    log::debug!("{:?}", config);

    let summary = generate_docs(&config)?;
    println!("--------------------------------------------------");
    println!("{}", summary);

    Ok(())
}
