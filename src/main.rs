use clap::Parser;
use ipv4_subnet_calc::config::Config;
use ipv4_subnet_calc::input::{acquire, Acquisition};
use ipv4_subnet_calc::logging::init_logging;
use ipv4_subnet_calc::output::{print_reports, OutputFormat};
use ipv4_subnet_calc::processing::FirstUsableGateway;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    if config.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let inputs = match acquire(&config.input, config.timeout())? {
        Acquisition::Supplied(inputs) => inputs,
        Acquisition::NoInput => {
            log::info!("No input supplied");
            eprintln!("No subnet input supplied");
            return Ok(());
        }
        Acquisition::TimedOut => {
            return Err(format!("No subnet input within {}s", config.timeout_secs).into());
        }
    };

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let failed = print_reports(
        &inputs,
        &FirstUsableGateway,
        format,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    if failed > 0 {
        return Err(format!("{failed} of {} inputs were invalid", inputs.len()).into());
    }
    Ok(())
}
