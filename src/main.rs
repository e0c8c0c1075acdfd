//! EdPortal CLI
//!
//! Terminal front-end for the student portal:
//! - Show the dashboard, courses and rewards
//! - Take the daily test
//! - Log learning events

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use edportal::api::{normalize_base_url, HttpGateway};
use edportal::events::log_event;
use edportal::config::{generate_default_config, Config};
use edportal::models::{ActivityType, LearningEvent, Student};
use edportal::render::{self, OutputFormat};
use edportal::session::Session;
use edportal::views::daily_test::today;
use edportal::views::{
    CoursesView, DailyTestView, DashboardView, Delivery, Destination, MountScope,
    NavigationShell, RewardsPage,
};

#[derive(Parser)]
#[command(name = "edportal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Student learning portal in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Roll number to sign in with (overrides config)
    #[arg(long, global = true)]
    pub roll_no: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the signed-in student
    Whoami,

    /// Show streak, confidence, topics and progress
    Dashboard,

    /// List enrolled courses
    Courses {
        /// Course id to show details for
        #[arg(short, long)]
        select: Option<i64>,
    },

    /// Show today's quiz, or answer it
    Test {
        /// Option number to submit (1-based)
        #[arg(short, long)]
        answer: Option<usize>,
    },

    /// Show puzzle progress and badges
    Rewards,

    /// Log a learning event
    Log {
        /// Topic studied
        topic: String,
        /// Score (0-100)
        #[arg(short, long)]
        score: u8,
        /// Minutes spent
        #[arg(short = 't', long)]
        time_spent: u32,
        /// Activity type (quiz, practice, revision, test)
        #[arg(short, long, default_value = "practice")]
        activity: ActivityType,
        /// Attempt number
        #[arg(long, default_value_t = 1)]
        attempt: u32,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let config = load_config(&cli)?;
    edportal::logging::init(&config.logging);

    tracing::debug!(api_url = %config.api.base_url, "Starting EdPortal v{}", env!("CARGO_PKG_VERSION"));

    let api = HttpGateway::new(&config.api.base_url).context("Failed to build HTTP client")?;

    let mut session = Session::new(&config.api.demo_roll_no);
    session.bootstrap(&api).await;
    let Some(student) = session.student().cloned() else {
        bail!(
            "Could not resolve student {} at {}: {}",
            session.roll_no(),
            api.base_url(),
            session.last_error().unwrap_or("unknown error")
        );
    };

    let scope = MountScope::new();
    match cli.command {
        Commands::Whoami => whoami(&student, cli.format)?,
        Commands::Dashboard => {
            let mut view = DashboardView::new(&student.id);
            let state = view.load(&api, &scope).await;
            emit(cli.format, state, render::render_dashboard(state))?;
            if state.error().is_some() {
                std::process::exit(1);
            }
        }
        Commands::Courses { select } => {
            let mut view = CoursesView::new(&student.id);
            view.load(&api, &scope).await;
            if let Some(id) = select {
                view.select(id)?;
            }
            match cli.format {
                OutputFormat::Json => match view.detail() {
                    Some(detail) => println!("{}", render::to_json(&detail)?),
                    None => println!("{}", render::to_json(view.listing())?),
                },
                OutputFormat::Table => print!("{}", render::render_courses(&view)),
            }
            if view.listing().is_failed() {
                std::process::exit(1);
            }
        }
        Commands::Test { answer } => take_test(&api, &scope, &student, answer, cli.format).await?,
        Commands::Rewards => {
            let mut page = RewardsPage::new(&student.id);
            let state = page.load(&api, &scope).await;
            emit(cli.format, state, render::render_rewards(state))?;
            if state.error().is_some() {
                std::process::exit(1);
            }
        }
        Commands::Log {
            topic,
            score,
            time_spent,
            activity,
            attempt,
        } => {
            let event = LearningEvent {
                student_id: student.id.clone(),
                date: today(),
                activity_type: activity,
                topic,
                score,
                time_spent,
                attempt_number: attempt,
            };
            if let Delivery::Failed(error) = log_event(&api, &event).await? {
                bail!("Event not delivered: {}", error);
            }
            println!("Logged {} ({}) score {} for {} min", event.topic, event.activity_type, event.score, event.time_spent);
        }
        Commands::Config { .. } => {}
    }

    scope.unmount();
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = normalize_base_url(url);
    }
    if let Some(roll_no) = &cli.roll_no {
        config.api.demo_roll_no = roll_no.clone();
    }
    Ok(config)
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config).with_context(|| format!("Failed to write {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

fn whoami(student: &Student, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render::to_json(student)?),
        OutputFormat::Table => {
            let shell = NavigationShell::new(student);
            print!("{}", render::render_nav(&shell));
            println!("Student id: {}", student.id);
            for destination in Destination::ALL {
                println!("  {:<12} {}", destination.label(), destination.path());
            }
        }
    }
    Ok(())
}

fn emit<T: serde::Serialize>(format: OutputFormat, value: &T, table: String) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render::to_json(value)?),
        OutputFormat::Table => print!("{}", table),
    }
    Ok(())
}

async fn take_test(
    api: &HttpGateway,
    scope: &MountScope,
    student: &Student,
    answer: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut view = DailyTestView::new(&student.id);
    view.load(api, scope).await;

    if let Some(error) = view.load_error() {
        bail!("Could not load today's test: {}", error);
    }

    if let Some(choice) = answer {
        let index = choice.checked_sub(1).context("Options are numbered from 1")?;
        view.select(index)?;
        view.submit_and_deliver(api, today()).await?;

        if let Delivery::Failed(error) = view.delivery() {
            eprintln!("Result graded locally but not saved: {}", error);
        }
    }

    match format {
        OutputFormat::Json => println!(
            "{}",
            render::to_json(&serde_json::json!({
                "quiz": view.quiz(),
                "phase": view.phase(),
                "delivery": view.delivery(),
                "feedback": view.feedback(),
            }))?
        ),
        OutputFormat::Table => print!("{}", render::render_quiz(&view)),
    }
    Ok(())
}
