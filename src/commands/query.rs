use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;

use fitcoach::client::CatalogClient;
use fitcoach::models::{Coach, TrainingProgram};

/// Coach listings
#[derive(Debug, Clone, Subcommand)]
pub enum CoachQuery {
    /// All coaches
    All,
    /// A single coach by id
    Get { id: i32 },
    /// Coaches shown on the homepage
    Featured,
    /// Coaches whose specialization contains the text
    Specialization { text: String },
    /// Coaches accepting new clients
    Available,
    /// Coaches rated 4.5 or higher, best first
    TopRated,
}

/// Program listings
#[derive(Debug, Clone, Subcommand)]
pub enum ProgramQuery {
    /// All programs
    All,
    /// A single program by id
    Get { id: i32 },
    /// Programs shown on the homepage
    Featured,
    /// Programs at exactly this difficulty level
    Difficulty { level: String },
    /// Programs owned by a coach
    Coach {
        #[arg(allow_negative_numbers = true)]
        coach_id: i32,
    },
    /// Programs whose goal contains the text
    Goal { text: String },
    /// Programs priced within [min, max]
    PriceRange { min: f64, max: f64 },
}

/// Query coaches through the API
pub async fn coaches(client: &CatalogClient, query: CoachQuery, json: bool) -> Result<()> {
    let coaches = match query {
        CoachQuery::All => client.coaches().await?,
        CoachQuery::Get { id } => match client.coach(id).await? {
            Some(coach) => vec![coach],
            None => {
                println!("Coach {id} not found");
                return Ok(());
            }
        },
        CoachQuery::Featured => client.featured_coaches().await?,
        CoachQuery::Specialization { text } => client.coaches_by_specialization(&text).await?,
        CoachQuery::Available => client.available_coaches().await?,
        CoachQuery::TopRated => client.top_rated_coaches().await?,
    };

    if json {
        return print_json(&coaches);
    }

    println!("Coaches ({})", coaches.len());
    println!("{:-<72}", "");
    for coach in &coaches {
        print_coach(coach);
    }
    Ok(())
}

/// Query programs through the API
pub async fn programs(client: &CatalogClient, query: ProgramQuery, json: bool) -> Result<()> {
    let programs = match query {
        ProgramQuery::All => client.programs().await?,
        ProgramQuery::Get { id } => match client.program(id).await? {
            Some(program) => vec![program],
            None => {
                println!("Program {id} not found");
                return Ok(());
            }
        },
        ProgramQuery::Featured => client.featured_programs().await?,
        ProgramQuery::Difficulty { level } => client.programs_by_difficulty(&level).await?,
        ProgramQuery::Coach { coach_id } => client.programs_by_coach(coach_id).await?,
        ProgramQuery::Goal { text } => client.programs_by_goal(&text).await?,
        ProgramQuery::PriceRange { min, max } => client.programs_by_price_range(min, max).await?,
    };

    if json {
        return print_json(&programs);
    }

    println!("Programs ({})", programs.len());
    println!("{:-<72}", "");
    for program in &programs {
        print_program(program);
    }
    Ok(())
}

/// Check API server health
pub async fn health(client: &CatalogClient) -> Result<()> {
    let status = client
        .health()
        .await
        .with_context(|| format!("Health check failed for {}", client.config().base_url))?;

    println!(
        "Status:      {}",
        if status.healthy { "healthy" } else { "unhealthy" }
    );
    println!("Environment: {}", status.environment);
    println!("Version:     {}", status.version);
    println!("Uptime:      {}s", status.uptime_secs);

    if !status.healthy {
        anyhow::bail!("Server reported unhealthy status");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{output}");
    Ok(())
}

fn print_coach(coach: &Coach) {
    let featured = if coach.is_featured { " *" } else { "" };
    println!(
        "[{:>3}] {}{} - {}",
        coach.id, coach.name, featured, coach.specialization
    );
    println!(
        "      {} yrs | {} clients | {:.1}% success | {:.1} rating | ${:.2}/hr{}",
        coach.experience,
        coach.client_count,
        coach.success_rate,
        coach.rating,
        coach.hourly_rate,
        if coach.is_available { "" } else { " | unavailable" }
    );
}

fn print_program(program: &TrainingProgram) {
    let featured = if program.is_featured { " *" } else { "" };
    println!(
        "[{:>3}] {}{} - {} ({})",
        program.id, program.name, featured, program.goal, program.difficulty_level
    );
    println!(
        "      {} weeks | ${:.2} | coach {} | {} enrolled | {:.1} rating",
        program.duration_weeks,
        program.price,
        program.coach_id,
        program.enrollment_count,
        program.rating
    );
}
