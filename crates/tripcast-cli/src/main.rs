use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tripcast_client::{PredictClient, Session};
use tripcast_core::{ClientConfig, GeoPoint, MapSelection, TripForm, Variant};

#[derive(Parser)]
#[command(name = "tripcast")]
#[command(about = "Tripcast - trip duration prediction client", long_about = None)]
struct Cli {
    /// Prediction service base URL [env: TRIPCAST_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Page variant: form, quick or map [env: TRIPCAST_VARIANT]
    #[arg(long, global = true)]
    variant: Option<Variant>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict trip duration from typed fields
    Predict {
        /// Pickup time, ISO-8601 (form variant only; quick uses the current time)
        #[arg(long, default_value = "")]
        pickup_datetime: String,

        /// Pickup latitude
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        pickup_lat: String,

        /// Pickup longitude
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        pickup_lon: String,

        /// Dropoff latitude
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        dropoff_lat: String,

        /// Dropoff longitude
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        dropoff_lon: String,
    },

    /// Predict from map clicks; the first click is departure, the second arrival
    Map {
        /// Clicked point as LAT,LON (repeat for each click)
        #[arg(long = "click", value_name = "LAT,LON", allow_hyphen_values = true)]
        clicks: Vec<GeoPoint>,
    },

    /// Show offline evaluation metrics per model
    Results,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if matches!(cli.command, Some(Commands::Map { .. })) {
        config.variant = Variant::Map;
    }

    let client = PredictClient::from_config(&config)?;
    tracing::debug!("Using {} ({} variant)", client.base_url(), client.variant());
    let mut session = Session::new(client);

    let alert = match cli.command {
        Some(Commands::Predict {
            pickup_datetime,
            pickup_lat,
            pickup_lon,
            dropoff_lat,
            dropoff_lon,
        }) => {
            if session.variant() == Variant::Map {
                anyhow::bail!("The map variant takes points; use `tripcast map --click LAT,LON`");
            }
            let form = TripForm {
                pickup_datetime,
                pickup_latitude: pickup_lat,
                pickup_longitude: pickup_lon,
                dropoff_latitude: dropoff_lat,
                dropoff_longitude: dropoff_lon,
            };
            let alert = session.submit_form(form).await;
            print_area(session.board().results());
            alert
        }
        Some(Commands::Map { clicks }) => {
            for point in clicks {
                if let Err(e) = session.click(point) {
                    show_alert(&e.to_string());
                }
            }
            let alert = session.submit_selection().await;
            print_area(session.board().results());
            alert
        }
        Some(Commands::Results) => {
            let alert = session.fetch_results().await;
            print_area(session.board().evaluation_results());
            alert
        }
        None => {
            run_interactive(&mut session).await?;
            None
        }
    };

    match alert {
        Some(text) => {
            show_alert(&text);
            Ok(ExitCode::from(2))
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

fn print_area(text: &str) {
    if !text.is_empty() {
        println!("{}", text);
    }
}

fn show_alert(text: &str) {
    eprintln!("Alert: {}", text);
}

async fn run_interactive(session: &mut Session) -> Result<()> {
    display_welcome(session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "help" | "h" | "?" => display_help(),
            "click" | "c" => handle_click(session, &parts[1..]),
            "points" | "p" => display_points(session.selection()),
            "predict" | "go" => {
                let alert = match session.variant() {
                    Variant::Map => session.submit_selection().await,
                    variant => {
                        let form = read_form(variant)?;
                        session.submit_form(form).await
                    }
                };
                match alert {
                    Some(text) => show_alert(&text),
                    None => display_area("Results", session.board().results()),
                }
            }
            "results" | "r" => match session.fetch_results().await {
                Some(text) => show_alert(&text),
                None => display_area("Evaluation Results", session.board().evaluation_results()),
            },
            "clear" | "cls" => {
                print!("\x1B[2J\x1B[1;1H");
                stdout.flush()?;
            }
            "exit" | "quit" | "q" => break,
            _ => {
                println!("Unknown command: {}. Type 'help' for available commands.", cmd);
            }
        }
    }

    Ok(())
}

fn handle_click(session: &mut Session, args: &[&str]) {
    if session.variant() != Variant::Map {
        println!("Clicks only apply to the map variant (start with --variant map).");
        return;
    }

    let point = match args {
        [lat, lon] => format!("{},{}", lat, lon).parse::<GeoPoint>(),
        [pair] => pair.parse::<GeoPoint>(),
        _ => {
            println!("Usage: click <lat> <lon>");
            return;
        }
    };

    match point {
        Ok(point) => match session.click(point) {
            Ok(pick) => println!("  {} marker placed at {}", pick.label(), pick.point()),
            Err(e) => show_alert(&e.to_string()),
        },
        Err(e) => println!("Error: {}", e),
    }
}

/// Prompts for each input of a text variant. Blank answers stay blank so the
/// validator sees them.
fn read_form(variant: Variant) -> Result<TripForm> {
    let mut form = TripForm::default();
    for id in variant.input_ids() {
        let value = prompt(id)?;
        form.set_field(id, value);
    }
    Ok(form)
}

fn prompt(label: &str) -> Result<String> {
    print!("  {}: ", label);
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().lock().read_line(&mut value)?;
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}

fn display_area(title: &str, text: &str) {
    println!();
    println!("{}:", title);
    println!("{:-<40}", "");
    for line in text.lines() {
        println!("  {}", line);
    }
    println!();
}

fn display_points(selection: &MapSelection) {
    let show = |p: Option<GeoPoint>| p.map_or("-".to_string(), |p| p.to_string());
    println!("  Departure: {}", show(selection.departure()));
    println!("  Arrival:   {}", show(selection.arrival()));
}

fn display_welcome(session: &Session) {
    println!();
    println!("  Tripcast - trip duration prediction");
    println!();
    println!("  Service: {}", session.client().base_url());
    println!("  Variant: {}", session.variant().label());
    println!();
    println!("  Type 'help' for commands.");
    println!();
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  click, c <lat> <lon>   Place the next map point (map variant)");
    println!("  points, p              Show the selected departure and arrival");
    println!("  predict, go            Submit the trip (prompts for fields in form/quick)");
    println!("  results, r             Fetch model evaluation metrics");
    println!("  clear, cls             Clear screen");
    println!("  help, h                Show this help message");
    println!("  exit, quit, q          Leave");
    println!();
}
