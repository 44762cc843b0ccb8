use chrono::Local;
use clap::Parser;
use nfz_finder::app::report;
use nfz_finder::config::{CliConfig, Command};
use nfz_finder::core::ConfigProvider;
use nfz_finder::data::regions;
use nfz_finder::utils::error::ErrorSeverity;
use nfz_finder::utils::logger;
use nfz_finder::{AppointmentSearch, FinderError, HttpRegistryClient, SearchSession};

fn exit_with(e: &FinderError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let args = match &cli.command {
        Command::Regions => {
            print!("{}", report::render_regions());
            return Ok(());
        }
        Command::Specialties => {
            print!("{}", report::render_specialties());
            return Ok(());
        }
        Command::Search(args) => args,
    };

    let criteria = match args.criteria() {
        Ok(criteria) => criteria,
        Err(e) => exit_with(&e),
    };

    let client = HttpRegistryClient::from_config(&config);
    tracing::info!("🚀 Using registry endpoint {}", client.endpoint());

    let engine = AppointmentSearch::new(client).with_concurrency(config.concurrent_requests());
    let session = SearchSession::new(engine).with_sort_key(config.sort_key());

    let results = match session.search(&criteria).await {
        Ok(results) => results,
        Err(e) => exit_with(&e),
    };

    let region_name = regions::lookup(&criteria.region_id)
        .map(|r| r.display_name)
        .unwrap_or(criteria.region_id.as_str());
    tracing::info!(
        "Terminy {} w NFZ - {}{} ({} wizyt)",
        criteria.specialty,
        region_name,
        if criteria.include_neighbors { " i okolice" } else { "" },
        results.len()
    );

    let output = match report::render(&results, config.output_format(), Local::now().date_naive()) {
        Ok(output) => output,
        Err(e) => exit_with(&e),
    };
    print!("{}", output);

    Ok(())
}
