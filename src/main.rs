use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stratos_deploy::{AppError, DEFAULT_MOUNT_PREFIX};

#[derive(Parser)]
#[command(name = "stratos-deploy")]
#[command(version)]
#[command(
    about = "Provision stratos.host workloads: Nomad jobs, Vault policies, certificate roles",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one provisioning pass against the orchestrator and secrets manager
    #[clap(visible_alias = "a")]
    Apply {
        /// Deploy directory containing job.hcl and policy.hcl
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Secrets-manager mount the certificate roles live under
        #[arg(long, default_value = DEFAULT_MOUNT_PREFIX)]
        mount_prefix: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Apply { dir, mount_prefix } => {
            stratos_deploy::apply(&dir, &mount_prefix).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
