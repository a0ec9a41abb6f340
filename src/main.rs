use clap::{Parser, Subcommand};
use dotenv::dotenv;
use placeholder_tools::placeholder::{self, PlaceholderClient};
use placeholder_tools::ToolRegistry;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the function descriptor of every tool
    List,
    /// Call a tool and print its result
    Call {
        /// Name of the tool to call
        #[arg(short, long)]
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let registry = ToolRegistry::new();
    let client = PlaceholderClient::from_env()?;
    for tool in placeholder::create_tools(client) {
        log::info!("Registered tool: {}", tool.name());
        registry.register(tool).await;
    }

    match args.command {
        Commands::List => {
            let descriptors: Vec<Value> = registry
                .definitions()
                .await
                .iter()
                .map(|d| d.to_function_descriptor())
                .collect();
            println!("{}", serde_json::to_string_pretty(&descriptors)?);
        }
        Commands::Call { tool, args } => {
            let input: Value = serde_json::from_str(&args)?;
            let result = registry.invoke(&tool, input).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
