use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "texpress-cli")]
#[command(about = "Client CLI for the texpress rendering service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status
    Status,
    /// Render equations to a PDF file
    Render {
        /// Equations to render; joined with the '**' delimiter
        #[arg(required = true)]
        equations: Vec<String>,

        /// Document title
        #[arg(short, long, default_value = "Equations")]
        title: String,

        /// Insert a page break after each equation
        #[arg(short, long)]
        page_break: bool,

        /// Output file for the PDF
        #[arg(short, long, default_value = "equations.pdf")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(&cli.url).send().await?;
            let body: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Commands::Render {
            equations,
            title,
            page_break,
            output,
        } => {
            let payload = json!({
                "equations_raw": equations.join("**"),
                "page_break_between": page_break,
                "title": title,
            });

            let res = client
                .post(format!("{}/render", cli.url))
                .json(&payload)
                .send()
                .await?;

            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: service returned status {}", status);
                if let Ok(body) = res.text().await {
                    eprintln!("{}", body);
                }
                std::process::exit(1);
            }

            let bytes = res.bytes().await?;
            std::fs::write(&output, &bytes)?;
            println!("Wrote {} bytes to {}", bytes.len(), output.display());
        }
    }

    Ok(())
}
