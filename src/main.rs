use academicai::core::config::{self, CliOverrides};
use academicai::core::request::{CitationStyle, WordCount};
use academicai::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "academicai", about = "Academic essay generator demo", version)]
struct Args {
    /// Pre-fill the essay topic
    #[arg(short, long)]
    topic: Option<String>,

    /// Word count: 250, 500, 1000, 1500 or 2000
    #[arg(short, long)]
    words: Option<WordCount>,

    /// Citation style: APA, MLA, Chicago or Harvard
    #[arg(short, long)]
    style: Option<CitationStyle>,

    /// Simulated generation delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log file path
    #[arg(long, default_value = "academicai.log")]
    log_file: PathBuf,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("AcademicAI {} starting up", env!("CARGO_PKG_VERSION"));

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let overrides = CliOverrides {
        topic: args.topic,
        word_count: args.words,
        citation_style: args.style,
        delay_ms: args.delay_ms,
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::info!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
