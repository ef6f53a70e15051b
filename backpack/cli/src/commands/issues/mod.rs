use anyhow::{Context, Result};
use colored::Colorize;
use github_issues_lib::cli::Args;
use github_issues_lib::config::Config;
use github_issues_lib::github::GitHubClient;
use github_issues_lib::steps::{self, Session};
use tracing::instrument;

/// Resolves the config file, then applies `GITHUB_API_URL` and `--api-base` in that order.
pub fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?.with_env_overrides()?,
        None => Config::load()?,
    };
    match &args.api_base {
        Some(raw) => config.with_api_base(raw),
        None => Ok(config),
    }
}

/// Runs the anonymous issue-listing scenario and returns the number of issues seen.
#[instrument(level = "debug", skip(args), fields(user = %args.user, repo = %args.repo))]
pub fn run(args: &Args) -> Result<usize> {
    let config = load_config(args)?;
    let client = GitHubClient::new(&config).context("Failed to initialise the GitHub client")?;
    let mut session = Session::new(client);
    tracing::debug!(api_base = %session.client().api_base(), "client ready");

    println!("--- Issue Listing Check ---");
    println!("Target: {}/{}", args.user, args.repo);
    println!("Given {}", steps::ANONYMOUS_STEP);
    println!("When {}", steps::fetch_step(&args.user, &args.repo));
    println!("Then {}", steps::minimum_step(args.minimum));

    match steps::run_scenario(&mut session, &args.user, &args.repo, args.minimum) {
        Ok(count) => {
            let pulls = session
                .last_results()
                .map_or(0, |issues| issues.iter().filter(|i| i.is_pull_request()).count());
            println!(
                "{}",
                format!("✅ Found {count} issues ({pulls} pull requests)").green()
            );
            Ok(count)
        }
        Err(err) => {
            println!("{}", format!("❌ {err}").red());
            Err(err).context("Issue listing check failed")
        }
    }
}
