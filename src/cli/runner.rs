//! CLI runner - executes commands

use crate::catalog::CatalogClient;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::pagination::{PageRequest, Query};
use serde_json::Value;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        self.output(&output);
        Ok(())
    }

    /// Run the CLI command and return its result as JSON
    pub async fn execute(&self) -> Result<Value> {
        let client = CatalogClient::with_config(self.load_config()?)?;

        let value = match &self.cli.command {
            Commands::Search { term } => serde_json::to_value(client.search(term).await?)?,
            Commands::Text { text } => serde_json::to_value(client.get_by_text(text).await?)?,
            Commands::ThemeRange { range, from } => {
                let query = Self::query(range.clone(), *from);
                serde_json::to_value(client.get_for_theme_range(query).await?)?
            }
            Commands::Theme { name } => {
                serde_json::to_value(client.get_for_theme_name(name).await?)?
            }
            Commands::Year { year, from } => {
                let query = Self::query(year.to_string(), *from);
                serde_json::to_value(client.get_for_year(query).await?)?
            }
            Commands::Themes => serde_json::to_value(client.get_theme_ranges().await?)?,
            Commands::Years => serde_json::to_value(client.get_years().await?)?,
        };

        Ok(value)
    }

    /// Load config file, then apply command-line overrides
    fn load_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!("Loading catalog config from {}", path.display());
                CatalogConfig::from_file(path)?
            }
            None => CatalogConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(max_pages) = self.cli.max_pages {
            config = config.with_max_pages(max_pages);
        }

        config.validate()?;
        Ok(config)
    }

    fn query(value: String, from: Option<u32>) -> Query {
        match from {
            Some(offset) => Query::from(PageRequest::new(offset, value)),
            None => Query::from(value),
        }
    }

    fn output(&self, value: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            }
        }
    }
}
