mod assistant;
mod cli;
mod config;
mod dashboard;
mod error;
mod logging;
mod matrix;
mod model;
mod store;
mod tracker;
mod ui;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use crate::assistant::{AssistRequest, AssistantClient, CompletionSender};
use crate::cli::{Cli, Command, ObjectiveCommand, ProjectCommand, SourceArg};
use crate::config::NexusConfig;
use crate::dashboard::DashboardSummary;
use crate::error::NexusError;
use crate::matrix::MatrixBuckets;
use crate::model::{ObjectiveDraft, PhaseFilter, ProjectDraft, StatusFilter};
use crate::store::{RecordStore, RestStore};
use crate::tracker::Tracker;
use crate::ui::{RequestSpinner, Screen};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose);
    let screen = Screen::new();

    if let Err(err) = run(cli, &screen).await {
        log::warn!("command failed: {err:#}");
        screen.error(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, screen: &Screen) -> Result<()> {
    let config = NexusConfig::load()?;
    let store = RestStore::new(
        config.backend_url.clone(),
        config.api_key.clone(),
        config.session_token(),
    );
    let tracker = Tracker::new(store, config.list_limit);

    match cli.command {
        Command::Dashboard => {
            let spinner = RequestSpinner::start("Loading dashboard...");
            let result = tracker.overview().await;
            spinner.finish();
            let (objectives, projects) = result?;
            let summary =
                DashboardSummary::compute(&objectives, &projects, Utc::now().date_naive());
            screen.dashboard(&summary, &objectives, &projects);
        }

        Command::Objective { command } => run_objective(command, &tracker, screen).await?,

        Command::Project { command } => run_project(command, &tracker, screen).await?,

        Command::Matrix { view, mode } => match view {
            SourceArg::Objectives => {
                let spinner = RequestSpinner::start("Loading objectives...");
                let result = tracker.objectives(None, StatusFilter::All).await;
                spinner.finish();
                let items = result?;
                screen.matrix(&MatrixBuckets::partition(&items), mode.into());
            }
            SourceArg::Projects => {
                let spinner = RequestSpinner::start("Loading projects...");
                let result = tracker.projects(None, PhaseFilter::All).await;
                spinner.finish();
                let items = result?;
                screen.matrix(&MatrixBuckets::partition(&items), mode.into());
            }
        },

        Command::Assist {
            request,
            title,
            description,
        } => {
            if config.assistant_api_key.is_empty() {
                return Err(NexusError::Config(
                    "assistant API key not configured; set OPENAI_API_KEY or \
                     assistant_api_key in nexus.toml"
                        .into(),
                )
                .into());
            }
            let client = AssistantClient::new(
                config.assistant_api_key.clone(),
                config.assistant_model.clone(),
                config.assistant_url.clone(),
            );
            let req = AssistRequest {
                objective_title: title,
                objective_description: description,
                request_type: request.into(),
            };
            let spinner = RequestSpinner::start("Consulting the research assistant...");
            let result = client.complete(&req).await;
            spinner.finish();
            let response = result?;
            screen.assistant(req.request_type, &response.result);
        }
    }

    Ok(())
}

async fn run_objective<S: RecordStore>(
    command: ObjectiveCommand,
    tracker: &Tracker<S>,
    screen: &Screen,
) -> Result<()> {
    match command {
        ObjectiveCommand::List { search, status } => {
            let items = tracker.objectives(search.as_deref(), status.into()).await?;
            screen.objectives(&items);
        }

        ObjectiveCommand::Show { id } => {
            let item = tracker.objective(&id).await?;
            screen.objective_detail(&item);
        }

        ObjectiveCommand::Add {
            title,
            description,
            priority,
            category,
            due,
            progress,
            status,
            impact,
            effort,
            tags,
        } => {
            let draft = ObjectiveDraft {
                user_id: None,
                title,
                description,
                priority,
                category,
                due_date: due,
                progress,
                status,
                impact: impact.map(|l| l.as_wire().to_string()).unwrap_or_default(),
                effort: effort.map(|l| l.as_wire().to_string()).unwrap_or_default(),
                tags,
            };
            let spinner = RequestSpinner::start("Saving objective...");
            let result = tracker.save_objective(None, draft).await;
            spinner.finish();
            let saved = result?;
            screen.saved("Objective created successfully", &saved.id);
        }

        ObjectiveCommand::Edit {
            id,
            title,
            description,
            priority,
            category,
            due,
            progress,
            status,
            impact,
            effort,
            tags,
        } => {
            // Edit works like the form: load the record, apply the changed
            // fields, submit the whole draft back.
            let existing = tracker.objective(&id).await?;
            let mut draft = ObjectiveDraft::from(&existing);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = Some(description);
            }
            if let Some(priority) = priority {
                draft.priority = priority;
            }
            if let Some(category) = category {
                draft.category = Some(category);
            }
            if let Some(due) = due {
                draft.due_date = Some(due);
            }
            if let Some(progress) = progress {
                draft.progress = progress;
            }
            if let Some(status) = status {
                draft.status = status;
            }
            if let Some(impact) = impact {
                draft.impact = impact.as_wire().to_string();
            }
            if let Some(effort) = effort {
                draft.effort = effort.as_wire().to_string();
            }
            if !tags.is_empty() {
                draft.tags = tags;
            }
            let spinner = RequestSpinner::start("Saving objective...");
            let result = tracker.save_objective(Some(&id), draft).await;
            spinner.finish();
            let saved = result?;
            screen.saved("Objective updated successfully", &saved.id);
        }
    }

    Ok(())
}

async fn run_project<S: RecordStore>(
    command: ProjectCommand,
    tracker: &Tracker<S>,
    screen: &Screen,
) -> Result<()> {
    match command {
        ProjectCommand::List { search, phase } => {
            let items = tracker.projects(search.as_deref(), phase.into()).await?;
            screen.projects(&items);
        }

        ProjectCommand::Show { id } => {
            let item = tracker.project(&id).await?;
            screen.project_detail(&item);
        }

        ProjectCommand::Add {
            title,
            description,
            phase,
            team,
            members,
            start,
            end,
            progress,
            status,
            impact,
            effort,
        } => {
            let draft = ProjectDraft {
                user_id: None,
                title,
                description,
                phase,
                team,
                members,
                start_date: start,
                end_date: end,
                progress,
                status,
                impact: impact.map(|l| l.as_wire().to_string()).unwrap_or_default(),
                effort: effort.map(|l| l.as_wire().to_string()).unwrap_or_default(),
            };
            let spinner = RequestSpinner::start("Saving project...");
            let result = tracker.save_project(None, draft).await;
            spinner.finish();
            let saved = result?;
            screen.saved("Project created successfully", &saved.id);
        }

        ProjectCommand::Edit {
            id,
            title,
            description,
            phase,
            team,
            members,
            start,
            end,
            progress,
            status,
            impact,
            effort,
        } => {
            let existing = tracker.project(&id).await?;
            let mut draft = ProjectDraft::from(&existing);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = Some(description);
            }
            if let Some(phase) = phase {
                draft.phase = Some(phase);
            }
            if let Some(team) = team {
                draft.team = Some(team);
            }
            if let Some(members) = members {
                draft.members = members;
            }
            if let Some(start) = start {
                draft.start_date = Some(start);
            }
            if let Some(end) = end {
                draft.end_date = Some(end);
            }
            if let Some(progress) = progress {
                draft.progress = progress;
            }
            if let Some(impact) = impact {
                draft.impact = impact.as_wire().to_string();
            }
            if let Some(effort) = effort {
                draft.effort = effort.as_wire().to_string();
            }
            if let Some(status) = status {
                draft.status = status;
            }
            let spinner = RequestSpinner::start("Saving project...");
            let result = tracker.save_project(Some(&id), draft).await;
            spinner.finish();
            let saved = result?;
            screen.saved("Project updated successfully", &saved.id);
        }
    }

    Ok(())
}
