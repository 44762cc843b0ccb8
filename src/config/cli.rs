use crate::app::report::OutputFormat;
use crate::config::toml_config::FinderConfig;
use crate::domain::model::{SearchCriteria, SortKey};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "nfz-finder")]
#[command(about = "Find the earliest NFZ appointment dates by specialty and region")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the registry endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Maximum number of region requests in flight (1 = sequential)
    #[arg(long, global = true)]
    pub concurrent_requests: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search for the earliest appointment dates
    Search(SearchArgs),
    /// List known regions and their neighbors
    Regions,
    /// List selectable specialties
    Specialties,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Specialty (benefit) name, free text
    #[arg(short, long)]
    pub specialty: String,

    /// Region identifier, e.g. mazowieckie
    #[arg(short, long)]
    pub region: String,

    /// Also search the adjacent regions
    #[arg(short = 'n', long)]
    pub include_neighbors: bool,

    /// Sort key: date or distance
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Output format: text, json or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl SearchArgs {
    pub fn criteria(&self) -> Result<SearchCriteria> {
        SearchCriteria::new(&self.specialty, &self.region, self.include_neighbors)
    }
}

impl CliConfig {
    /// 載入設定檔（若有），再套用命令列覆蓋值並驗證
    pub fn load_config(&self) -> Result<FinderConfig> {
        let mut config = match &self.config {
            Some(path) => FinderConfig::from_file(path)?,
            None => FinderConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.registry.endpoint = endpoint.clone();
        }
        if let Some(concurrent) = self.concurrent_requests {
            config.search.concurrent_requests = Some(concurrent);
        }
        if let Command::Search(args) = &self.command {
            if let Some(sort) = args.sort {
                config.search.default_sort = Some(sort);
            }
            if let Some(format) = args.format {
                config.output.format = Some(format);
            }
        }

        config.validate()?;
        Ok(config)
    }
}
