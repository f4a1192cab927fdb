//! roi-runner: headless runner for the invoicing ROI simulator.
//!
//! Usage:
//!   roi-runner simulate --input scenario.json
//!   roi-runner save     --input scenario.json --db scenarios.db
//!   roi-runner list     --db scenarios.db
//!   roi-runner show     --id 3 --db scenarios.db
//!   roi-runner report   --id 3 --email ap@example.com --out report.txt
//!   roi-runner report   --input scenario.json --email ap@example.com
//!   roi-runner --ipc-mode --db scenarios.db

use anyhow::{anyhow, Context, Result};
use roi_core::{
    config::RoiConfig,
    engine::RoiEngine,
    report::{build_report, ReportRequest},
    scenario::{ScenarioInput, ScenarioRecord},
    store::ScenarioStore,
    types::ScenarioId,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Simulate { scenario: ScenarioInput },
    CreateScenario { scenario: ScenarioInput },
    ListScenarios,
    GetScenario { id: ScenarioId },
    GenerateReport { email: String, scenario: ScenarioInput },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = flag_value(&args, "--db").unwrap_or("scenarios.db");
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");

    let config = RoiConfig::load(data_dir)?;
    let engine = RoiEngine::from_config(&config);
    let store = ScenarioStore::open(db)?;
    store.migrate()?;

    if ipc_mode {
        return run_ipc_loop(&engine, &store);
    }

    match command_name(&args) {
        Some("simulate") => {
            let input = read_input(&args)?;
            print_simulation(&engine, &input);
        }
        Some("save") => {
            let input = read_input(&args)?;
            input.validate()?;
            let id = store.create(&input)?;
            println!("Saved scenario {id}");
        }
        Some("list") => print_scenarios(&store.list()?),
        Some("show") => {
            let record = store.get_by_id(required_id(&args)?)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            print_simulation(&engine, &record.input);
        }
        Some("report") => {
            let email = flag_value(&args, "--email").unwrap_or_default().to_string();
            let scenario = match flag_value(&args, "--id") {
                Some(_) => store.get_by_id(required_id(&args)?)?.input,
                None => read_input(&args)?,
            };
            let report = build_report(&engine, &ReportRequest { email, scenario })?;
            let out = flag_value(&args, "--out").unwrap_or(&report.filename);
            std::fs::write(out, report.render_text())
                .with_context(|| format!("Cannot write {out}"))?;
            println!("Report written to {out}");
        }
        other => {
            return Err(anyhow!(
                "unknown command {other:?}; expected simulate, save, list, show or report"
            ))
        }
    }

    Ok(())
}

fn run_ipc_loop(engine: &RoiEngine, store: &ScenarioStore) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                stdout.flush()?;
                continue;
            }
        };
        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        let reply = handle_command(engine, store, cmd).unwrap_or_else(|e| {
            log::warn!("IPC command failed: {e}");
            serde_json::json!({ "error": e.to_string() })
        });
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn handle_command(
    engine: &RoiEngine,
    store: &ScenarioStore,
    cmd: IpcCommand,
) -> Result<serde_json::Value> {
    let reply = match cmd {
        IpcCommand::Simulate { scenario } => {
            serde_json::to_value(engine.simulate(&scenario).display())?
        }
        IpcCommand::CreateScenario { scenario } => {
            scenario.validate()?;
            serde_json::json!({ "id": store.create(&scenario)? })
        }
        IpcCommand::ListScenarios => serde_json::to_value(store.list()?)?,
        IpcCommand::GetScenario { id } => serde_json::to_value(store.get_by_id(id)?)?,
        IpcCommand::GenerateReport { email, scenario } => {
            let report = build_report(engine, &ReportRequest { email, scenario })?;
            let content = report.render_text();
            serde_json::json!({
                "filename": report.filename.clone(),
                "content": content,
                "report": report,
            })
        }
        IpcCommand::Quit => serde_json::Value::Null,
    };
    Ok(reply)
}

fn print_simulation(engine: &RoiEngine, input: &ScenarioInput) {
    let result = engine.simulate(input);
    if result.is_degenerate() {
        log::warn!("Simulation produced non-finite values; check the scenario inputs");
    }

    println!("=== ROI SUMMARY ===");
    println!("  scenario:           {}", input.display_name("N/A"));
    for (field, value) in result.display().fields() {
        println!("  {:<20}{value}", format!("{field}:"));
    }
}

fn print_scenarios(records: &[ScenarioRecord]) {
    if records.is_empty() {
        println!("  (No saved scenarios)");
        return;
    }
    for r in records {
        println!(
            "  {:>4} | {} | {} invoices/mo | {} months",
            r.id,
            r.input.display_name("N/A"),
            r.input.monthly_invoice_volume,
            r.input.time_horizon_months
        );
    }
}

fn read_input(args: &[String]) -> Result<ScenarioInput> {
    let path = flag_value(args, "--input").ok_or_else(|| anyhow!("--input <file> is required"))?;
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"))?;
    let input = serde_json::from_str(&content).with_context(|| format!("Cannot parse {path}"))?;
    Ok(input)
}

fn required_id(args: &[String]) -> Result<ScenarioId> {
    flag_value(args, "--id")
        .ok_or_else(|| anyhow!("--id <n> is required"))?
        .parse()
        .context("--id must be an integer")
}

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: [&str; 6] = ["--db", "--data-dir", "--input", "--id", "--email", "--out"];

/// The first argument that is neither a flag nor a flag's value.
fn command_name(args: &[String]) -> Option<&str> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            rest.next();
        } else if !arg.starts_with("--") {
            return Some(arg);
        }
    }
    None
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
