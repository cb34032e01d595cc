//! Grantflow CLI - track grant projects, milestones, fund requisitions and
//! the closure workflow

use clap::Parser;
use grantflow::cli::{
    Cli, ClosureCommands, Commands, MilestoneCommands, PartnerCommands, ProjectCommands,
    ReportCommands, RequisitionCommands,
};
use grantflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; flags take precedence over RUST_LOG
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> grantflow::Result<()> {
    use grantflow::cli::commands;

    let cwd = cli.cwd.as_deref();
    let role = cli.role.as_deref();
    let email = cli.email.as_deref();

    match cli.command {
        Some(Commands::Init { force }) => commands::init::run(cwd, force).await,
        Some(Commands::List { json, status }) => {
            commands::list::run(cwd, json, status.as_deref()).await
        }
        Some(Commands::Show { id, json, as_of }) => {
            commands::show::run(cwd, &id, json, as_of.as_deref(), role, email).await
        }
        Some(Commands::Status { json }) => commands::status::run(cwd, json).await,
        Some(Commands::Project(command)) => match command {
            ProjectCommands::Create {
                id,
                application,
                title,
                start,
                end,
            } => {
                commands::project::create(cwd, &id, &application, &title, &start, &end, role, email)
                    .await
            }
            ProjectCommands::SetStatus { id, status } => {
                commands::project::set_status(cwd, &id, &status, role, email).await
            }
        },
        Some(Commands::Milestone(command)) => match command {
            MilestoneCommands::Add {
                project,
                title,
                due,
                description,
            } => {
                commands::milestone::add(cwd, &project, &title, &due, &description, role, email)
                    .await
            }
            MilestoneCommands::SetStatus {
                project,
                milestone,
                status,
            } => commands::milestone::set_status(cwd, &project, &milestone, &status).await,
            MilestoneCommands::Report {
                project,
                milestone,
                filename,
            } => commands::milestone::report(cwd, &project, &milestone, &filename).await,
        },
        Some(Commands::Requisition(command)) => match command {
            RequisitionCommands::Draft {
                project,
                milestone,
                amount,
                notes,
            } => commands::requisition::draft(cwd, &project, &milestone, amount, &notes).await,
            RequisitionCommands::Submit {
                project,
                milestone,
                amount,
                notes,
            } => {
                commands::requisition::submit(
                    cwd,
                    &project,
                    milestone.as_deref(),
                    amount,
                    notes.as_deref(),
                )
                .await
            }
            RequisitionCommands::Review {
                project,
                requisition,
                decision,
                notes,
            } => {
                commands::requisition::review(
                    cwd,
                    &project,
                    &requisition,
                    &decision,
                    &notes,
                    role,
                    email,
                )
                .await
            }
        },
        Some(Commands::Partner(command)) => match command {
            PartnerCommands::Add {
                project,
                name,
                partner_role,
            } => commands::partner::add(cwd, &project, &name, &partner_role).await,
            PartnerCommands::Remove { project, partner } => {
                commands::partner::remove(cwd, &project, &partner).await
            }
            PartnerCommands::Mou {
                project,
                partner,
                filename,
            } => commands::partner::mou(cwd, &project, &partner, &filename).await,
        },
        Some(Commands::Report(command)) => match command {
            ReportCommands::Upload {
                project,
                kind,
                filename,
            } => commands::report::upload(cwd, &project, &kind, &filename).await,
            ReportCommands::Submit { project } => commands::report::submit(cwd, &project).await,
            ReportCommands::Review {
                project,
                decision,
                notes,
            } => commands::report::review(cwd, &project, &decision, &notes, role, email).await,
        },
        Some(Commands::Closure(command)) => match command {
            ClosureCommands::Initiate { project } => {
                commands::closure::initiate(cwd, &project, role, email).await
            }
            ClosureCommands::Decide {
                project,
                decision,
                signed_by,
                notes,
            } => commands::closure::decide(cwd, &project, &decision, &signed_by, &notes).await,
            ClosureCommands::Certificate { project } => {
                commands::closure::certificate(cwd, &project, role, email).await
            }
            ClosureCommands::Archive { project } => {
                commands::closure::archive(cwd, &project, role, email).await
            }
        },
        Some(Commands::Doctor) => commands::doctor::run(cwd).await,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
