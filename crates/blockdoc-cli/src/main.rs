use std::{env, fs, io::Read, process};

use anyhow::{Context, Result};
use blockdoc_config::Config;
use blockdoc_engine::{LogSink, compile, parse_markdown};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut theme: Option<String> = None;
    let mut input: Option<String> = None;
    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--theme" => match rest.next() {
                Some(name) => theme = Some(name.clone()),
                None => usage_exit(&args[0]),
            },
            "-" => input = Some("-".to_string()),
            flag if flag.starts_with("--") => usage_exit(&args[0]),
            path => input = Some(path.to_string()),
        }
    }
    let Some(input) = input else {
        usage_exit(&args[0]);
    };

    // Theme precedence: flag, then config file, then the built-in default.
    let theme = match theme {
        Some(theme) => theme,
        None => match Config::load() {
            Ok(Some(config)) => config.default_theme,
            Ok(None) => "default".to_string(),
            Err(e) => {
                eprintln!("Warning: failed to load config file: {e}");
                "default".to_string()
            }
        },
    };

    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
    } else {
        fs::read_to_string(&input).with_context(|| format!("reading {input}"))?
    };

    let blocks = if input.ends_with(".json") {
        let content: Value =
            serde_json::from_str(&text).with_context(|| format!("parsing {input} as JSON"))?;
        compile(&content, &theme, &LogSink)?
    } else {
        parse_markdown(&text)
    };

    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

fn usage_exit(program: &str) -> ! {
    eprintln!("Usage: {program} [--theme <name>] <input.md | input.json | ->");
    eprintln!("  .json inputs compile as a content payload; anything else as markdown");
    eprintln!("  \"-\" reads markdown from stdin");
    process::exit(1);
}
