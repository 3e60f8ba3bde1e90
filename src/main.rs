use std::{env, fs::File, path::Path};

use expense_engine::dlq::StdErrDlq;
use expense_engine::ingestion::ScriptReader;
use expense_engine::presenter::{self, StdOutPresenter};
use expense_engine::registry::Registry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let script_path = args
        .next()
        .ok_or("usage: expense_engine <script.csv> <user>...")?;
    let users: Vec<String> = args.collect();
    if users.is_empty() {
        return Err("at least one user name is required".into());
    }

    let file = File::open(Path::new(&script_path))?;
    let mut script = ScriptReader::new(file);

    let mut registry = Registry::spawn(&users, StdOutPresenter::default(), StdErrDlq::default());
    registry.route(&mut script).await;

    let accounts = registry.close().await;
    presenter::print_summary(&accounts);

    Ok(())
}
