//! CLI administration tool for the student management service.
//!
//! Works directly against the database through the same service layer the HTTP
//! API uses, so every business rule still applies.
//!
//! # Usage
//!
//! ```bash
//! # Show totals
//! cargo run --bin admin -- stats
//!
//! # List students
//! cargo run --bin admin -- students list --inactive
//!
//! # Show, activate, deactivate, delete
//! cargo run --bin admin -- students show 7
//! cargo run --bin admin -- students deactivate 7
//! cargo run --bin admin -- students delete 7 -y
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*` components).

use student_management::application::services::{StudentService, StudentStats};
use student_management::config;
use student_management::domain::entities::Student;
use student_management::infrastructure::persistence::PgStudentRepository;
use student_management::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Service = StudentService<PgStudentRepository>;

/// CLI tool for managing student records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Student management subcommands.
#[derive(Subcommand)]
enum StudentAction {
    /// List students
    List {
        /// Only active students
        #[arg(long, conflicts_with = "inactive")]
        active: bool,

        /// Only inactive students
        #[arg(long)]
        inactive: bool,
    },

    /// Show one student
    Show { id: i64 },

    /// Mark a student active
    Activate { id: i64 },

    /// Mark a student inactive
    Deactivate { id: i64 },

    /// Permanently delete a student
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and row counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Students { action } => {
            let service = service_for(&pool);
            handle_student_action(action, &service).await?
        }
        Commands::Stats => handle_stats(&service_for(&pool)).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

fn service_for(pool: &PgPool) -> Service {
    let repository = Arc::new(PgStudentRepository::new(Arc::new(pool.clone())));
    StudentService::new(repository)
}

/// Dispatches student management commands.
async fn handle_student_action(action: StudentAction, service: &Service) -> Result<()> {
    match action {
        StudentAction::List { active, inactive } => {
            let students = if active {
                service.active_students().await?
            } else if inactive {
                service.inactive_students().await?
            } else {
                service.list_students().await?
            };
            print_students(&students);
        }
        StudentAction::Show { id } => {
            let student = service.get_student(id).await?;
            print_student(&student);
        }
        StudentAction::Activate { id } => {
            let student = service.activate_student(id).await?;
            println!(
                "{} {} is now {}",
                "✅".green(),
                student.full_name().cyan(),
                "ACTIVE".green().bold()
            );
        }
        StudentAction::Deactivate { id } => {
            let student = service.deactivate_student(id).await?;
            println!(
                "{} {} is now {}",
                "✅".green(),
                student.full_name().cyan(),
                "INACTIVE".yellow().bold()
            );
        }
        StudentAction::Delete { id, yes } => delete_student(service, id, yes).await?,
    }

    Ok(())
}

/// Prints students as a table.
///
/// # Output Format
///
/// ```text
///   ID    Name                       Email                          Course         Status
///   ──────────────────────────────────────────────────────────────────────────────────────
///   1     Jane Doe                   jane@x.com                     CS             ACTIVE
/// ```
fn print_students(students: &[Student]) {
    println!("{}", "📋 Students".bright_blue().bold());
    println!();

    if students.is_empty() {
        println!("{}", "  No students found".yellow());
        println!();
        return;
    }

    println!(
        "  {:<5} {:<26} {:<30} {:<14} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Course".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(86).bright_black());

    for student in students {
        println!(
            "  {:<5} {:<26} {:<30} {:<14} {}",
            student.id.to_string().bright_black(),
            student.full_name().cyan(),
            student.email,
            student.course.as_deref().unwrap_or("-"),
            status_label(student.is_active)
        );
    }

    println!();
    println!(
        "  Total: {}",
        students.len().to_string().bright_white().bold()
    );
    println!();
}

fn print_student(student: &Student) {
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    println!("{}", "🎓 Student".bright_blue().bold());
    println!();
    println!("  ID:            {}", student.id.to_string().bright_black());
    println!("  Name:          {}", student.full_name().cyan());
    println!("  Email:         {}", student.email);
    println!("  Phone:         {}", or_dash(&student.phone_number));
    println!(
        "  Date of birth: {}",
        student
            .date_of_birth
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Address:       {}", or_dash(&student.address));
    println!("  Course:        {}", or_dash(&student.course));
    println!("  Status:        {}", status_label(student.is_active));
    println!(
        "  Created:       {}",
        student.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!(
        "  Updated:       {}",
        student.updated_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!();
}

fn status_label(is_active: bool) -> ColoredString {
    if is_active {
        "ACTIVE".green()
    } else {
        "INACTIVE".yellow()
    }
}

/// Permanently deletes a student after confirmation (default: No).
async fn delete_student(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Student".bright_blue().bold());
    println!();

    let student = service.get_student(id).await?;

    println!("  Student: {}", student.full_name().cyan());
    println!("  Email:   {}", student.email);
    println!();
    println!(
        "{}",
        "⚠️  This permanently removes the record. Use `deactivate` for a soft delete."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this student?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete_student(id).await?;

    println!();
    println!("{}", "✅ Student deleted".green().bold());
    println!();

    Ok(())
}

/// Displays total, active and inactive student counts.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats = service.stats().await?;

    println!(
        "  Total:    {}",
        stats.total.to_string().bright_green().bold()
    );
    println!(
        "  Active:   {}",
        stats.active.to_string().bright_green().bold()
    );
    println!(
        "  Inactive: {}",
        stats.inactive.to_string().yellow().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &config::Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let stats = service_for(pool).stats().await?;

            println!(
                "  URL:        {}",
                config::mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Students:   {}", student_counts(&stats).bright_white());
            println!();
        }
    }

    Ok(())
}

fn student_counts(stats: &StudentStats) -> String {
    format!(
        "{} ({} active, {} inactive)",
        stats.total, stats.active, stats.inactive
    )
}
