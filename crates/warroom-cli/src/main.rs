mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    action::ActionSubcommand, deliverable::DeliverableSubcommand, incident::IncidentSubcommand,
    log::LogSubcommand, plan::PlanSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "warroom",
    about = "Incident-response war room — expand strategic plans, generate deliverables, keep the record straight",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .warroom/ or .git/)
    #[arg(long, global = true, env = "WARROOM_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a war room in the current project
    Init {
        /// Project name recorded in the config
        #[arg(long)]
        project: Option<String>,
    },

    /// Manage incidents
    Incident {
        #[command(subcommand)]
        subcommand: IncidentSubcommand,
    },

    /// Manage an incident's strategic plans
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },

    /// Manage actions under the selected plan
    Action {
        #[command(subcommand)]
        subcommand: ActionSubcommand,
    },

    /// Generate deliverable content for an action (AI with fallback)
    Generate {
        /// Incident slug
        incident: String,

        /// Action id (unique prefix accepted); omit with --all
        action: Option<String>,

        /// Generate for every action of the selected plan that is still blank
        #[arg(long)]
        all: bool,
    },

    /// Inspect and edit deliverables
    Deliverable {
        #[command(subcommand)]
        subcommand: DeliverableSubcommand,
    },

    /// Export a deliverable as HTML
    Export {
        /// Incident slug
        incident: String,

        /// Action id (unique prefix accepted)
        action: String,
    },

    /// Inspect the generation audit log
    Log {
        #[command(subcommand)]
        subcommand: LogSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init { project } => cmd::init::run(&root, project.as_deref()),
        Commands::Incident { subcommand } => cmd::incident::run(&root, subcommand, cli.json),
        Commands::Plan { subcommand } => cmd::plan::run(&root, subcommand, cli.json),
        Commands::Action { subcommand } => cmd::action::run(&root, subcommand, cli.json),
        Commands::Generate {
            incident,
            action,
            all,
        } => cmd::generate::run(&root, &incident, action.as_deref(), all, cli.json),
        Commands::Deliverable { subcommand } => cmd::deliverable::run(&root, subcommand, cli.json),
        Commands::Export { incident, action } => {
            cmd::export::run(&root, &incident, &action, cli.json)
        }
        Commands::Log { subcommand } => cmd::log::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
