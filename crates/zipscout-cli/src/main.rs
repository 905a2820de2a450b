use std::path::PathBuf;

use clap::Parser;

use zipscout_places::SearchMode;

mod output;
mod run;

#[derive(Debug, Parser)]
#[command(name = "zipscout")]
#[command(about = "Find businesses near zip codes via the Google Places API")]
struct Cli {
    /// Google Maps API key
    #[arg(short = 'k', long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Comma-separated zip codes to search
    #[arg(short = 'z', long)]
    zips: String,

    /// Search radius in miles
    #[arg(short = 'r', long, default_value_t = 50)]
    radius: u32,

    /// Free-text search term
    #[arg(
        short = 's',
        long,
        required_unless_present = "place_types",
        conflicts_with = "place_types"
    )]
    search_term: Option<String>,

    /// Comma-separated place type tokens (e.g. "hardware_store,locksmith")
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPES",
        required_unless_present = "search_term"
    )]
    place_types: Option<String>,

    /// Output CSV file; intermediate directories are created
    #[arg(short = 'o', long, default_value = "output.csv")]
    output: PathBuf,
}

impl Cli {
    /// Resolves the argument pair into the run's search mode.
    ///
    /// clap enforces that exactly one of `--search-term`/`--type` is present;
    /// the fallthrough arm guards against that invariant ever loosening.
    fn search_mode(&self) -> anyhow::Result<SearchMode> {
        match (&self.search_term, &self.place_types) {
            (Some(keyword), None) => Ok(SearchMode::Text {
                keyword: keyword.clone(),
            }),
            (None, Some(raw_types)) => {
                let types: Vec<String> = raw_types
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect();
                if types.is_empty() {
                    anyhow::bail!("--type was given but contained no type tokens");
                }
                Ok(SearchMode::Typed { types })
            }
            _ => anyhow::bail!("exactly one of --search-term or --type must be given"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = run::RunConfig {
        mode: cli.search_mode()?,
        api_key: cli.api_key,
        zips: cli.zips,
        radius_miles: cli.radius,
        output: cli.output,
    };

    run::run(config).await
}

#[cfg(test)]
mod tests;
