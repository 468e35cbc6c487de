use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use engineering_suite::calculator::format_number;

#[derive(Parser)]
#[command(name = "suite-cli")]
#[command(about = "Command-line client for the Engineering Suite API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[arg(short, long, default_value = "/api/v1")]
    prefix: String,

    /// Print raw JSON instead of a summary
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate box properties (inches)
    Box {
        length: f64,
        width: f64,
        height: f64,
    },
    /// Estimate material cost for a surface area (square inches)
    Cost {
        surface_area: f64,
        #[arg(short, long, default_value = "cardboard")]
        material: String,
    },
    /// List available materials
    Materials,
    /// Describe the available calculators
    Info,
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api = format!("{}{}", cli.url.trim_end_matches('/'), cli.prefix);

    let res = match &cli.command {
        Commands::Box {
            length,
            width,
            height,
        } => {
            client
                .post(format!("{}/box-calculator", api))
                .json(&json!({ "length": length, "width": width, "height": height }))
                .send()
                .await?
        }
        Commands::Cost {
            surface_area,
            material,
        } => {
            client
                .post(format!("{}/material-cost", api))
                .json(&json!({ "surface_area": surface_area, "material": material }))
                .send()
                .await?
        }
        Commands::Materials => client.get(format!("{}/materials", api)).send().await?,
        Commands::Info => client.get(format!("{}/calculator-info", api)).send().await?,
        Commands::Health => client.get(format!("{}/health", api)).send().await?,
    };

    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Some(message) = error_message(&text) {
            eprintln!("{}", message);
        }
        std::process::exit(1);
    }
    let body: Value = serde_json::from_str(&text)?;

    match (&cli.command, cli.json) {
        (Commands::Box { .. }, false) => print_box_summary(&body["data"]),
        (Commands::Cost { .. }, false) => print_cost_summary(&body),
        _ => println!("{}", serde_json::to_string_pretty(&body)?),
    }

    Ok(())
}

/// Human-readable message from an error response body, which may be
/// JSON (`detail`, then `error`), plain text, or empty.
fn error_message(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(body) => body
            .get("detail")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .map(String::from)
            .or_else(|| Some(text.to_string())),
        Err(_) => Some(text.to_string()),
    }
}

fn number(value: &Value, decimals: usize) -> String {
    value
        .as_f64()
        .map(|v| format_number(v, decimals))
        .unwrap_or_else(|| "-".to_string())
}

fn print_box_summary(data: &Value) {
    let dims = &data["dimensions"];
    let basic = &data["basic_calculations"];
    let geometry = &data["geometry"];
    let practical = &data["practical"];

    println!(
        "Dimensions:    {} x {} x {}",
        dims["length_ft"].as_str().unwrap_or("-"),
        dims["width_ft"].as_str().unwrap_or("-"),
        dims["height_ft"].as_str().unwrap_or("-"),
    );
    println!(
        "Surface area:  {} sq in ({} sq ft)",
        number(&basic["surface_area_sqin"], 2),
        number(&basic["surface_area_sqft"], 2)
    );
    println!(
        "Volume:        {} cu in ({} cu ft, {} L)",
        number(&basic["volume_cuin"], 2),
        number(&basic["volume_cuft"], 2),
        number(&basic["volume_liters"], 2)
    );
    println!(
        "Base perimeter {} in, diagonal {} in",
        number(&geometry["perimeter_base"], 2),
        number(&geometry["diagonal"], 2)
    );
    println!(
        "Paint:         {} oz, {} cardboard sheets",
        number(&practical["paint_needed_oz"], 1),
        number(&practical["cardboard_sheets"], 1)
    );
    if let Some(weights) = practical["weight_estimates"].as_object() {
        for (material, weight) in weights {
            println!("  {:<10} {} lb", material, number(weight, 1));
        }
    }
    println!("{}", data["comparisons"].as_str().unwrap_or(""));
}

fn print_cost_summary(body: &Value) {
    println!(
        "{}: {} sq ft, estimated cost ${}",
        body["material"].as_str().unwrap_or("-"),
        number(&body["surface_area_sqft"], 2),
        number(&body["estimated_cost"], 2)
    );
}
