use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use chef_verify::{Config, Verifier};

#[derive(Parser)]
#[command(name = "chef-verify")]
#[command(about = "Headless browser verification for the Family Dinner web app")]
#[command(version)]
struct Cli {
    /// Scenario file to run (built-in dropdown scenario when omitted)
    config: Option<PathBuf>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Override the target URL
    #[arg(long)]
    url: Option<String>,

    /// Validate the scenario without launching a browser
    #[arg(long)]
    check: bool,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only errors)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> chef_verify::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // CLI overrides
    if let Some(url) = cli.url {
        config.target.url = url;
    }
    if cli.headed {
        config.browser.headless = false;
    }

    if cli.check {
        println!("Scenario valid: {}", config.name);
        println!("  Target: {}", config.target.url);
        println!("  Ready: {}", config.ready_selector);
        println!("  Section: {}", config.section_selector);
        println!("  Dropdown: {}", config.dropdown_selector);
        println!("  Screenshot: {}", config.screenshot);
        println!("  Timeout: {}ms", config.timeout_ms);
        return Ok(());
    }

    println!("Running: {}", config.name);

    let verifier = Verifier::new(&config.browser).await?;
    let report = verifier.run(&config).await;

    println!();
    if report.success {
        println!("Screenshot taken successfully.");
        if let Some(ref path) = report.screenshot {
            println!("  Saved: {}", path.display());
        }
    } else {
        println!(
            "An error occurred: {}",
            report.error.as_deref().unwrap_or("unknown")
        );
    }
    println!("  Steps: {}", report.steps_completed);
    println!("  Duration: {}ms", report.duration_ms);

    verifier.close().await?;

    if !report.success {
        std::process::exit(1);
    }

    Ok(())
}
