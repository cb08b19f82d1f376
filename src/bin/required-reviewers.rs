use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use secrecy::SecretString;

use required_reviewers::config::{RepositoryConfig, CONFIG_FILE_PATH};
use required_reviewers::gate::{run_gate, GateContext, GateOutcome};
use required_reviewers::github::api::base_github_url;
use required_reviewers::github::event::load_event_payload;
use required_reviewers::github::{create_github_client, GithubClient, GithubRepoName};
use required_reviewers::utils::logging::init_logging;

/// Fails a pull request check unless a member of the required reviewers team approved it.
#[derive(clap::Parser)]
struct Opts {
    /// Token used to read pull request reviews.
    #[arg(long, env = "INPUT_GITHUBTOKEN")]
    github_token: String,

    /// Personal access token with `read:org` scope, used to read team members.
    #[arg(long, env = "INPUT_ADDITIONALACCESSPAT")]
    additional_access_pat: String,

    /// Slug of the required reviewers team. Overrides the config file.
    #[arg(long, env = "INPUT_TEAM")]
    team: Option<String>,

    /// Path to the config file.
    #[arg(long, env = "INPUT_CONFIG", default_value = CONFIG_FILE_PATH)]
    config: PathBuf,

    /// Name of the event that triggered the workflow.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: String,

    /// Repository in the `<owner>/<name>` format.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: String,

    /// Path to the JSON payload of the triggering event.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = base_github_url())]
    api_url: String,
}

fn load_context(opts: &Opts) -> anyhow::Result<GateContext> {
    let repository: GithubRepoName = opts.repository.parse()?;
    let pull_request = load_event_payload(&opts.event_path)?;
    let config = RepositoryConfig::load(&opts.config)?;

    Ok(GateContext {
        event_name: opts.event_name.clone(),
        repository,
        pull_request,
        team: config.team(opts.team.as_deref()),
    })
}

async fn gate(opts: Opts) -> anyhow::Result<GateOutcome> {
    let ctx = load_context(&opts)?;

    let review_client = GithubClient::new(create_github_client(
        &SecretString::new(opts.github_token),
        &opts.api_url,
    )?);
    let team_client = GithubClient::new(create_github_client(
        &SecretString::new(opts.additional_access_pat),
        &opts.api_url,
    )?);

    Ok(run_gate(&ctx, &team_client, &review_client).await)
}

fn try_main(opts: Opts) -> GateOutcome {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")
    {
        Ok(runtime) => runtime,
        Err(error) => return GateOutcome::from_check(Err(error)),
    };

    runtime
        .block_on(gate(opts))
        .unwrap_or_else(|error| GateOutcome::from_check(Err(error)))
}

/// Invalid invocations fail the run like any other error, so that the check shows why.
/// Help and version requests still print and exit through clap.
fn parse_opts<I, T>(args: I) -> Result<Opts, GateOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Opts::try_parse_from(args).map_err(|error| match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
        _ => {
            let error = anyhow::Error::new(error).context("Invalid invocation");
            GateOutcome::from_check(Err(error))
        }
    })
}

fn main() {
    init_logging();

    let outcome = match parse_opts(std::env::args_os()) {
        Ok(opts) => try_main(opts),
        Err(outcome) => outcome,
    };
    if let Err(error) = outcome.report(&mut std::io::stdout().lock()) {
        eprintln!("Error: {error:?}");
    }
    if outcome.is_failure() {
        std::process::exit(1);
    }
}
