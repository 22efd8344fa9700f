use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(about = "Management CLI for the todo service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all todos
    List,
    /// Create a new todo
    Add {
        /// Task description
        body: String,
    },
    /// Mark a todo complete
    Done {
        /// Todo id
        id: u64,
    },
    /// Delete a todo
    Rm {
        /// Todo id
        id: u64,
    },
    /// Check service status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client.get(format!("{}/api/todos", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Add { body } => {
            let res = client
                .post(format!("{}/api/todos", cli.url))
                .json(&serde_json::json!({ "body": body }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Done { id } => {
            let res = client
                .put(format!("{}/api/todos/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Rm { id } => {
            let res = client
                .delete(format!("{}/api/todos/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Status => {
            let res = client
                .get(format!("{}/admin/status", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
