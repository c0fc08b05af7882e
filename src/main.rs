use durga_client::{logging, ApiClient, ClientConfig};

fn print_help() {
    println!("durga - backend API client");
    println!();
    println!("Usage:");
    println!("  durga logs               Fetch log records");
    println!("  durga scan               Fetch scan results");
    println!("  durga status             Fetch system status");
    println!("  durga exec <command>     Execute a command on the backend");
    println!();
    println!("The backend address comes from DURGA_API_URL, the config file,");
    println!("or defaults to http://localhost:5000.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = ClientConfig::load()?;
    let client = ApiClient::from_config(&config);

    match args.first().map(String::as_str) {
        Some("logs") => {
            let logs = client.get_logs().await;
            println!("{}", serde_json::to_string_pretty(&logs)?);
        }
        Some("scan") => {
            let results = client.get_scan_results().await;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Some("status") => {
            let status = client.get_system_status().await;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Some("exec") => {
            // Everything after "exec" is the command, passed through verbatim
            let command = args[1..].join(" ");
            let result = client.execute_command(&command).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => print_help(),
    }

    Ok(())
}
