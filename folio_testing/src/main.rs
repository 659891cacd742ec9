use std::net::IpAddr;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio_testing::{data_insert, relay};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Relay {
            host,
            port,
            form_name,
            honeypot_field,
        } => relay::start_server(host, port, form_name, honeypot_field).await?,
        Command::DataInsert {
            host,
            port,
            api_key,
            collection,
        } => data_insert::start_server(host, port, api_key, collection).await?,
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the form relay testing server
    Relay {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8003")]
        port: u16,
        #[arg(long, default_value = "contact")]
        form_name: String,
        #[arg(long, default_value = "bot-field")]
        honeypot_field: String,
    },
    /// Start the data store testing server
    DataInsert {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8004")]
        port: u16,
        #[arg(long, default_value = "test-api-key")]
        api_key: String,
        #[arg(long, default_value = "contact_submissions")]
        collection: String,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
