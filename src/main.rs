use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use scraper::Html;
use starting_goalies::{
    api::{StartingGoaliesClient, STARTING_GOALIES_URL, USER_AGENT},
    chrono_util::local_today,
    parser,
    schema::DailyReport,
};
use starting_goalies_utils::fs_json_util::write_json_pretty;
use url::Url;

#[derive(Parser)]
struct Opts {
    #[arg(long, default_value = STARTING_GOALIES_URL)]
    url: Url,
    #[arg(long, default_value = USER_AGENT)]
    user_agent: String,
    /// Only keep games involving this team (case-insensitive, partial match).
    /// Can be given more than once.
    #[arg(long = "team")]
    teams: Vec<String>,
    /// Also write the JSON document to this file.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Save the fetched page, e.g. to replay it with `parse_with_file`.
    #[arg(long)]
    save_html: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let client = StartingGoaliesClient::new(opts.url, &opts.user_agent)?;
    let body = client.fetch_page().await?;
    if let Some(path) = &opts.save_html {
        fs_err::write(path, &body).context("Failed to save the fetched page")?;
        info!("Saved the page to {path:?}.");
    }

    let mut report = DailyReport::new(
        local_today(),
        parser::parse(&Html::parse_document(&body)),
    );
    report.retain_teams(&opts.teams);

    println!("{}", serde_json::to_string_pretty(&report)?);
    if let Some(path) = &opts.output {
        write_json_pretty(path, &report)?;
        info!("Successfully saved data to {path:?}.");
    }
    Ok(())
}
