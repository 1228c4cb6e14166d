// Terminal host for the emoji plugin: reads chat lines from stdin and prints replies

// Exclude entire file from coverage - binary entry point cannot be unit tested
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use clap::Parser;
use emoji_translate_lib::{EmojiConfig, EmojiPlugin, FileSource};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "emoji-translate", version, about = "Translate chat lines into emoji")]
struct Args {
    /// JSON configuration file
    #[arg(long, default_value = "emoji.json")]
    config: PathBuf,

    /// Emojilib-style dataset used for `update` and the first translation
    #[arg(long, default_value = "emojis.json")]
    dataset: PathBuf,

    /// Print help entries and exit
    #[arg(long)]
    list_help: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match EmojiConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut plugin = match EmojiPlugin::new(config, FileSource::new(&args.dataset)) {
        Ok(plugin) => plugin,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.list_help {
        for entry in plugin.help() {
            println!("{}\t{}", entry.usage, entry.description);
        }
        return ExitCode::SUCCESS;
    }

    log::info!("Listening for '{}' commands on stdin", plugin.config().trigger());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };

        if !plugin.matches(&line) {
            continue;
        }

        let reply = plugin.run(&line).unwrap_or_else(|e| {
            log::warn!("Command failed: {}", e);
            e.to_string()
        });

        if writeln!(stdout, "{}", reply).is_err() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
