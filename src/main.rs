use std::io::{self, BufRead};

use stepwizard::{AppConfig, AppError, Session};
use wizard_core::{ComponentRegistry, RenderSnapshot, StepRef, Wizard};
use wizard_steps::{signup_registry, SignupWizard};

fn main() {
    // CLI mínima: `stepwizard [--country <ISO>] [<acción JSON>...]`
    // Sin acciones en argumentos, lee una acción JSON por línea de stdin.
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[stepwizard] {e}");
            std::process::exit(e.exit_code());
        }
    };
    init_logging(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut country: Option<String> = None;
    let mut actions: Vec<String> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--country" => {
                i += 1;
                if i < args.len() { country = Some(args[i].clone()); }
            }
            other => actions.push(other.to_string()),
        }
        i += 1;
    }

    let wizard = match country {
        Some(c) => SignupWizard::with_default_country(c),
        None => SignupWizard::new(),
    };
    if let Err(e) = run(&config, wizard, actions) {
        eprintln!("[stepwizard] {e}");
        std::process::exit(e.exit_code());
    }
}

fn init_logging(config: &AppConfig) {
    env_logger::Builder::new().parse_filters(&config.log_filter)
                              .format_timestamp_secs()
                              .init();
    log::debug!("logging inicializado con filtro `{}`", config.log_filter);
}

fn run(config: &AppConfig, wizard: SignupWizard, actions: Vec<String>) -> Result<(), AppError> {
    let start = config.start_step.as_deref().map(StepRef::from);
    let mut session = Session::open(wizard, signup_registry(), start)?;
    print_snapshot(config, &session.render()?)?;

    if actions.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            step(config, &mut session, &line)?;
        }
    } else {
        for raw in &actions {
            step(config, &mut session, raw)?;
        }
    }
    println!("{}", serde_json::to_string(session.state())?);
    Ok(())
}

/// Aplica una acción; los errores recuperables se reportan y la sesión sigue.
fn step<W, R>(config: &AppConfig, session: &mut Session<W, R>, raw: &str) -> Result<(), AppError>
    where W: Wizard,
          R: ComponentRegistry
{
    match session.apply_json(raw) {
        Ok(snapshot) => print_snapshot(config, &snapshot),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            eprintln!("[stepwizard] {e}");
            Ok(())
        }
    }
}

fn print_snapshot(config: &AppConfig, snapshot: &RenderSnapshot) -> Result<(), AppError> {
    let out = if config.pretty { serde_json::to_string_pretty(snapshot)? } else { serde_json::to_string(snapshot)? };
    println!("{out}");
    Ok(())
}
