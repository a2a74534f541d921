mod demo;
mod logging;

use cellui::settings::Settings;
use cellui::ui::WindowState;
use std::io;
use std::process::ExitCode;

const USAGE: &str = "usage: cellui [login|list]";

fn main() -> io::Result<ExitCode> {
    let _logging = logging::init();
    let settings = Settings::load();

    let which = std::env::args().nth(1).unwrap_or_else(|| "login".to_string());
    let result = match which.as_str() {
        "login" => demo::login::run(&settings)?,
        "list" => demo::list::run(&settings)?,
        "-h" | "--help" => {
            println!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        other => {
            eprintln!("unknown demo {other:?}\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    tracing::info!(state = ?result.state, message = ?result.message, "demo finished");
    if let Some(message) = &result.message {
        println!("{message}");
    }
    if result.state == WindowState::Error {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
