use std::process::ExitCode;

use error_derive::Error;
use settings::Settings;
use webcolors::{ColorError, ColorValue};

#[derive(Debug, Error)]
enum CliError {
    #[msg = "no color given"]
    MissingValue,

    #[msg = "conversion failed"]
    Color(#[from] ColorError),
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::init();
    webcolors::init();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match &error {
                CliError::Color(cause) => log::error!("{error}: {cause}"),
                CliError::MissingValue => log::error!("{error}"),
            }
            ExitCode::FAILURE
        },
    }
}

fn run(settings: &Settings) -> Result<(), CliError> {
    if settings.list {
        for (name, hex) in webcolors::forward_table(settings.specification)? {
            println!("{name}\t{hex}");
        }
        return Ok(());
    }

    let value: ColorValue = settings
        .value
        .as_deref()
        .ok_or(CliError::MissingValue)?
        .parse()?;

    log::debug!(
        "Converting {value} from {:?} to {:?} using {}",
        value.representation(),
        settings.target,
        settings.specification
    );

    let converted = value.convert(settings.target, settings.specification)?;
    println!("{converted}");

    Ok(())
}
