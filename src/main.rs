use anyhow::Result;
use clap::Parser;
use restamp::restamp_core::{recover, Cli, OutputFormat, RecoverOptions};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("restamp.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let options = RecoverOptions {
        source_dir: cli.source_dir,
        dest_dir: cli.dest_dir,
        video_tool: cli.video_tool,
        dry_run: cli.dry_run,
    };

    let stats = recover(&options)?;

    match cli.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Text => {
            if cli.dry_run {
                println!("\n[DRY RUN] Would recover:");
                println!("  {} images", stats.images_recovered);
                println!("  {} videos", stats.videos_recovered);
            } else {
                println!("\nRecovery complete!");
                println!("  {} images recovered", stats.images_recovered);
                println!("  {} videos recovered", stats.videos_recovered);
            }
            if stats.skipped_unsupported > 0 {
                println!("  {} unsupported files skipped", stats.skipped_unsupported);
            }
            if stats.failed > 0 {
                println!("  {} files failed", stats.failed);
            }
        }
    }

    Ok(())
}
