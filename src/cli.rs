use clap::{Parser, Subcommand};

use crate::api::job::{CreateJobRequest, JobService, JobStatus};

#[derive(Parser, Debug)]
#[command(name = "job-board", version, about = "Job tracking service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run migrations and start the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Print all jobs as JSON
    List,
    /// Create a job
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        message: String,
        /// unassigned, open or completed
        #[arg(long)]
        status: Option<JobStatus>,
    },
}

/// Execute a job command against the configured store
pub async fn run(service: &JobService, command: Command) -> Result<(), String> {
    match command {
        Command::List => {
            let jobs = service.list_jobs().await.map_err(|e| e.to_string())?;
            print_json(&jobs)
        }
        Command::Create { name, message, status } => {
            let job = service
                .create_job(CreateJobRequest { name, message, status })
                .await
                .map_err(|e| e.to_string())?;
            print_json(&job)
        }
        Command::Serve | Command::Migrate => Ok(()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", out);
    Ok(())
}
