use std::path::PathBuf;

use clap::Parser;
use scraper::Html;
use starting_goalies::{chrono_util::local_today, parser, schema::DailyReport};

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
    #[arg(long = "team")]
    teams: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);
    let mut report = DailyReport::new(local_today(), parser::parse(&html));
    report.retain_teams(&opts.teams);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
