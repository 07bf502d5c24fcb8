//! Marque - brand and marketing agents on the command line

use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::sync::Arc;

use marque_agents::{
    compose, AdditionalContext, AgentDescriptor, AgentError, AgentRegistry, AgentStatus,
    BrandContext, ComposedPrompt,
};
use marque_cli::{Cli, CliConfig, Commands, TaskArgs};
use marque_providers::GeminiClient;
use marque_runner::AgentRunner;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match CliConfig::load(&cli) {
        Ok(config) => {
            marque_telemetry::init_subscriber(&config.telemetry());
            dispatch(&cli, &config).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli, config: &CliConfig) -> CliResult {
    match &cli.command {
        Commands::List { json } => run_list(*json),
        Commands::Show { agent, json } => run_show(agent, *json),
        Commands::Compose { task, json } => run_compose(task, *json),
        Commands::Run { task, json } => run_task(config, task, *json).await,
    }
}

fn run_list(json_output: bool) -> CliResult {
    let agents = AgentRegistry::builtin().list_agents();

    if json_output {
        println!("{}", serde_json::to_string_pretty(agents)?);
        return Ok(());
    }

    println!("{}", "Agents".bold());
    for agent in agents {
        print_agent_line(agent);
    }
    Ok(())
}

fn run_show(agent_id: &str, json_output: bool) -> CliResult {
    let agent = find_agent(agent_id)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(agent)?);
        return Ok(());
    }

    println!("{} {}", agent.name.bold(), format!("({})", agent.id).dimmed());
    println!("  {} {}", "Role:".cyan(), agent.role);
    println!("  {} {}", "Status:".cyan(), status_label(agent.status));
    println!("  {} {}", "Color:".cyan(), agent.color_token);
    println!();
    println!("  {}", agent.description);
    println!();
    println!("  {}", "Capabilities:".cyan());
    for capability in &agent.capabilities {
        println!("    - {}", capability);
    }
    Ok(())
}

fn run_compose(task: &TaskArgs, json_output: bool) -> CliResult {
    let input = read_input(task)?;
    let brand = load_brand(task)?;
    let composed = compose(&task.agent, &input, brand.as_ref())?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&composed)?);
    } else {
        print_composed(&composed);
    }
    Ok(())
}

async fn run_task(config: &CliConfig, task: &TaskArgs, json_output: bool) -> CliResult {
    let agent = find_agent(&task.agent)?;
    let input = read_input(task)?;
    let context = load_brand(task)?.map(AdditionalContext::with_brand);

    let client = GeminiClient::new(config.provider())?;
    let runner = AgentRunner::new(Arc::new(client));
    tracing::debug!(agent = %agent.id, model = runner.model(), "starting run");

    if json_output {
        let output = runner
            .try_run_agent_task(&task.agent, &input, context.as_ref())
            .await?;
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        eprintln!(
            "{} {} {}",
            "Running:".cyan().bold(),
            agent.name,
            format!("on {}", runner.model()).dimmed()
        );
        let text = runner
            .run_agent_task(&task.agent, &input, context.as_ref())
            .await;
        println!("{}", text);
    }
    Ok(())
}

fn find_agent(agent_id: &str) -> Result<&'static AgentDescriptor, AgentError> {
    AgentRegistry::builtin()
        .find_agent(agent_id)
        .ok_or_else(|| AgentError::NotFound {
            id: agent_id.to_string(),
        })
}

fn read_input(task: &TaskArgs) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(input) = task.get_input() {
        return Ok(input);
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input.trim_end().to_string())
}

/// Brand file first, then `--voice` flags moved to the front.
fn load_brand(task: &TaskArgs) -> Result<Option<BrandContext>, Box<dyn std::error::Error>> {
    let brand = match &task.brand {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read brand file {}: {}", path.display(), e))?;
            let brand: BrandContext = serde_json::from_str(&content)
                .map_err(|e| format!("Invalid brand file {}: {}", path.display(), e))?;
            Some(brand)
        }
        None => None,
    };

    if task.voices.is_empty() {
        return Ok(brand);
    }

    Ok(Some(brand.unwrap_or_default().prioritize_voices(&task.voices)))
}

fn print_agent_line(agent: &AgentDescriptor) {
    println!(
        "  {:<22} {:<10} {} {}",
        agent.id.yellow(),
        agent.name.bold(),
        agent.role,
        status_label(agent.status)
    );
}

fn status_label(status: AgentStatus) -> colored::ColoredString {
    match status {
        AgentStatus::Active => status.as_str().green(),
        AgentStatus::Beta => status.as_str().magenta(),
    }
}

fn print_composed(composed: &ComposedPrompt) {
    println!("{}", "System instruction".bold().underline());
    println!("{}", composed.system_instruction);
    println!();
    println!("{}", "Prompt".bold().underline());
    println!("{}", composed.prompt);
}
