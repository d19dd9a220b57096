use std::{
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    format_itinerary, CycleOutcome, FormSubmission, HttpItineraryService, MemoryPage,
    PlannerOrchestrator, UiState,
};
use shared::domain::{FormField, MultiSelectField, SelectOption, FORM_ELEMENT_ID};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "planner", about = "Request and render generated trip itineraries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a trip request and print the rendered itinerary HTML.
    Submit(SubmitArgs),
    /// Render itinerary text from a file, or stdin, as HTML.
    Format { path: Option<PathBuf> },
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    origin: String,
    #[arg(long)]
    destination: String,
    #[arg(long)]
    start: String,
    #[arg(long)]
    end: String,
    #[arg(long)]
    num_people: String,
    /// Repeat for several activities; order is kept.
    #[arg(long)]
    activity: Vec<String>,
    /// Repeat for several food preferences; order is kept.
    #[arg(long)]
    food: Vec<String>,
    #[arg(long)]
    service_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn selected(values: &[String]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|value| SelectOption::new(value.as_str(), true))
        .collect()
}

fn page_from_args(args: &SubmitArgs) -> MemoryPage {
    MemoryPage::new()
        .with_field(FormField::Origin, args.origin.as_str())
        .with_field(FormField::Destination, args.destination.as_str())
        .with_field(FormField::Start, args.start.as_str())
        .with_field(FormField::End, args.end.as_str())
        .with_field(FormField::NumPeople, args.num_people.as_str())
        .with_options(MultiSelectField::Activity, selected(&args.activity))
        .with_options(MultiSelectField::Food, selected(&args.food))
}

async fn submit(args: SubmitArgs) -> Result<ExitCode> {
    let mut settings = load_settings(&args.config)?;
    if let Some(service_url) = &args.service_url {
        settings.service_url = service_url.clone();
    }

    let service = HttpItineraryService::new(&settings.service_url)
        .with_context(|| format!("cannot use service url '{}'", settings.service_url))?;
    info!(
        form = FORM_ELEMENT_ID,
        service_url = %settings.service_url,
        "submitting trip request"
    );
    let page = Arc::new(page_from_args(&args));
    let orchestrator = PlannerOrchestrator::new(page.clone(), page.clone(), Arc::new(service));

    match orchestrator.submit(&FormSubmission::new()).await {
        CycleOutcome::Rendered(UiState::Success(html)) => {
            println!("{html}");
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!("{}", page.error_text());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn format_file(path: Option<PathBuf>) -> Result<ExitCode> {
    let text = match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };
    println!("{}", format_itinerary(&text));
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Submit(args) => submit(args).await,
        Command::Format { path } => format_file(path),
    }
}

#[cfg(test)]
mod tests {
    use client_core::{collect_trip_request, FormSource};

    use super::*;

    #[test]
    fn submit_flags_fill_the_form_in_order() {
        let cli = Cli::try_parse_from([
            "planner",
            "submit",
            "--origin",
            "Lisbon",
            "--destination",
            "Porto",
            "--start",
            "2026-05-01",
            "--end",
            "2026-05-04",
            "--num-people",
            "2",
            "--activity",
            "wine tasting",
            "--activity",
            "museums",
        ])
        .expect("parse");
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };

        let page = page_from_args(&args);
        let request = collect_trip_request(&page);
        assert_eq!(request.num_people, "2");
        assert_eq!(request.activity, ["wine tasting", "museums"]);
        assert!(request.food.is_empty());
        assert_eq!(page.field_value(FormField::Origin), "Lisbon");
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn format_accepts_optional_path() {
        let cli = Cli::try_parse_from(["planner", "format"]).expect("parse");
        assert!(matches!(cli.command, Command::Format { path: None }));
    }
}
