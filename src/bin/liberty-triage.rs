use clap::Parser;
use liberty_triage::input::{read_input, DEFAULT_MAX_BYTES};
use liberty_triage::render::{render, RenderOptions};
use liberty_triage::report::{analyze, RecordFilter};
use liberty_triage::DEFAULT_CONTEXT_WINDOW;

#[derive(Parser, Debug)]
#[command(
    name = "liberty-triage",
    version,
    about = "Find the first error in a Liberty messages.log"
)]
struct Cli {
    /// Input file (`-` for stdin)
    #[arg(default_value = "-")]
    input: String,

    /// Records to show before the first ERROR/FATAL entry
    #[arg(long = "context", short = 'C', default_value_t = DEFAULT_CONTEXT_WINDOW)]
    context: usize,

    /// Print only a specific section: logs | summary | error
    #[arg(long = "only", default_value = "all")]
    only: String,

    /// Output format: json | table
    #[arg(long = "format", default_value = "json")]
    format: String,

    /// Keep only records of these severities in the logs list (repeatable, comma-separated)
    #[arg(long = "level", value_delimiter = ',')]
    level: Vec<String>,

    /// Keep only records whose timestamp, severity, thread, component or message
    /// contains this text (case-insensitive)
    #[arg(long = "match")]
    match_text: Option<String>,

    /// Refuse inputs larger than this many bytes
    #[arg(long = "max-bytes", default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: u64,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut filter = RecordFilter::new().with_levels(&cli.level);
    if let Some(text) = cli.match_text.as_deref() {
        filter = filter.with_search(text);
    }
    let opts = RenderOptions {
        section: cli.only.parse()?,
        format: cli.format.parse()?,
        filter,
    };

    if cli.input == "-" && atty::is(atty::Stream::Stdin) {
        tracing::warn!("reading log text from the terminal; finish with Ctrl-D");
    }
    let contents = read_input(&cli.input, cli.max_bytes)?;
    let report = analyze(&contents, cli.context);
    let out = render(&report, &opts)?;
    println!("{}", out.trim_end());
    Ok(())
}
