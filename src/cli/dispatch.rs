// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use std::rc::Rc;

use crate::checks::{Evaluator, Verdict};
use crate::config::{MergeChecksConfig, ResolverConfig, Strategy};
use crate::error::{ConfigError, Result};
use crate::git;
use crate::hosting::GitHubClient;
use crate::resolver::{CommitSource, LocalHistory, RemoteComparison, Resolution, Resolver};
use crate::runner::Runner;
use crate::status::{CommitStatusSink, LogSink, StatusSink, StatusTarget};

use super::args::{CheckArgs, Cli, Commands, InitArgs, RunArgs};

/// File written by `init`.
const INIT_CONFIG_FILE: &str = "merge-checks.toml";

/// Run the CLI with the given arguments, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let config = if let Some(config_path) = &cli.config {
        MergeChecksConfig::load_from(config_path)?
    } else {
        MergeChecksConfig::load()?
    };

    match cli.command.clone() {
        Commands::Run(args) => run_ci(&cli, config, args),
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Init(args) => run_init(args).map(|_| 0),
        Commands::Version => run_version().map(|_| 0),
    }
}

/// Run the CI entry point: resolve, evaluate, post statuses.
fn run_ci(cli: &Cli, mut config: MergeChecksConfig, args: RunArgs) -> Result<i32> {
    tracing::debug!("Running run command for {}", args.env.repository);

    if let Some(strategy) = args.strategy {
        config.resolver.strategy = strategy;
    }
    if let Some(mode) = args.mode {
        config.reporting.mode = mode;
    }
    if args.base_ref.is_some() {
        config.resolver.base_ref = args.base_ref.clone();
    }

    let env = &args.env;
    let client = Rc::new(GitHubClient::new(&config.hosting, env.token.clone()));

    tracing::info!(
        "Resolving commits with the {} strategy",
        config.resolver.strategy
    );
    let (source, head): (Box<dyn CommitSource>, String) = match config.resolver.strategy {
        Strategy::Local => {
            let local = LocalHistory::from_config(git::open_repo()?, &config.resolver);
            let head = local.resolve_revision(&env.sha)?;
            (Box::new(local) as Box<dyn CommitSource>, head)
        }
        Strategy::Remote => (
            Box::new(RemoteComparison::new(
                client.clone(),
                env.repository.clone(),
            )) as Box<dyn CommitSource>,
            env.sha.clone(),
        ),
    };

    let sink: Box<dyn StatusSink> = if cli.dry_run {
        Box::new(LogSink)
    } else {
        Box::new(CommitStatusSink::new(
            client,
            StatusTarget {
                repository: env.repository.clone(),
                commit_sha: head.clone(),
                status_name: config.reporting.status_name.clone(),
                details_url: env.details_url(),
            },
        ))
    };

    let evaluator = Evaluator::from_policy(&config.policy)?;
    let runner = Runner::new(
        Resolver::new(source),
        evaluator,
        sink,
        config.reporting.clone(),
    );

    let outcome = runner.run(&head, config.resolver.base_ref.as_deref())?;
    outcome.verdict.print(cli.format);

    Ok(outcome.exit_code)
}

/// Run the local check command.
fn run_check(cli: &Cli, config: &MergeChecksConfig, args: CheckArgs) -> Result<i32> {
    tracing::debug!("Running check command with args: {:?}", args);

    let evaluator = Evaluator::from_policy(&config.policy)?;
    let repo = git::open_repo()?;

    let commits = if !args.commits.is_empty() {
        LocalHistory::offline(repo).load_commits(&args.commits)?
    } else {
        let (source, base_ref) = match &args.base {
            Some(base) => (LocalHistory::offline(repo), base.clone()),
            None => {
                let resolver_config = ResolverConfig {
                    fetch: args.fetch,
                    ..config.resolver.clone()
                };
                (
                    LocalHistory::from_config(repo, &resolver_config),
                    config.resolver.local_base_ref().to_string(),
                )
            }
        };

        let head = source.resolve_revision(&args.head)?;
        match Resolver::new(Box::new(source)).resolve(Some(&base_ref), &head)? {
            Resolution::Identical { .. } => {
                Verdict::no_commits().print(cli.format);
                return Ok(0);
            }
            Resolution::Range { commits, .. } => commits,
        }
    };

    let verdict = evaluator.evaluate_detailed(&commits);
    verdict.print(cli.format);

    Ok(if verdict.result.passed { 0 } else { 1 })
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new(INIT_CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }
        .into());
    }

    std::fs::write(config_path, example_config())?;

    println!(
        "{} Created {}",
        style("✓").green().bold(),
        config_path.display()
    );

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("merge-checks {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

