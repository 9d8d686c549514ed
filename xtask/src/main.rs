//! Developer tasks for kvgate, run as `cargo xtask <command>`.
//!
//! The `xtask` alias lives in `.cargo/config.toml`. Commands here manage the
//! DynamoDB table the Lambda function reads and writes.

use clap::Parser;

mod dynamodb;
mod prelude;

/// Development tasks for the kvgate repository
#[derive(Debug, Parser)]
#[command(name = "xtask")]
#[command(about = "Manage the kvgate DynamoDB table", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every command.
#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Only print errors
    #[clap(long, global = true)]
    pub silent: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create, destroy or seed the DynamoDB table
    Dynamodb(dynamodb::DynamodbCommand),
}

#[tokio::main]
async fn main() -> Result<(), dynamodb::DynamodbError> {
    let Cli { global, command } = Cli::parse();

    match command {
        Commands::Dynamodb(dynamodb_cmd) => dynamodb::run(dynamodb_cmd, global).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_seed_with_records() {
        let cli = Cli::try_parse_from([
            "xtask",
            "dynamodb",
            "seed",
            "--record",
            "a=1",
            "--record",
            "b=2",
            "--table-name",
            "records",
            "--silent",
        ])
        .unwrap();

        assert!(cli.global.is_silent());
        let Commands::Dynamodb(command) = cli.command;
        let dynamodb::DynamodbAction::Seed(seed) = command.action else {
            panic!("expected seed action");
        };
        assert_eq!(seed.records, vec!["a=1".to_string(), "b=2".to_string()]);
        assert_eq!(seed.table_name, "records");
        assert!(!seed.force);
    }

    #[test]
    fn test_parse_deploy_destroy() {
        let cli = Cli::try_parse_from(["xtask", "dynamodb", "deploy", "--destroy", "--force"])
            .unwrap();

        let Commands::Dynamodb(command) = cli.command;
        let dynamodb::DynamodbAction::Deploy(deploy) = command.action else {
            panic!("expected deploy action");
        };
        assert!(deploy.destroy);
        assert!(deploy.force);
    }
}
