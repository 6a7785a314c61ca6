use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "ping-cli")]
#[command(about = "Command-line client for the ping service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the service answers GET /ping
    Ping,
    /// Ask the service to echo a message back
    Echo {
        /// Message to send; omit to send an empty body
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let url = format!("{}/ping", cli.url.trim_end_matches('/'));

    let res = match cli.command {
        Commands::Ping => client.get(&url).send().await?,
        Commands::Echo { message: Some(message) } => client.post(&url).json(&message).send().await?,
        Commands::Echo { message: None } => client.post(&url).send().await?,
    };
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if status.is_success() {
        println!("{}", text);
        return Ok(());
    }

    eprintln!("Error: service returned status {}", status);
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => eprintln!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => eprintln!("Response: {}", text),
    }
    std::process::exit(1);
}
