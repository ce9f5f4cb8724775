use std::io;
use std::process::ExitCode;

use completion_demos::{run_movie_recommender, Console, Credential, DemoConfig, OpenAiEngineClient};
use log::debug;

fn run() -> completion_demos::Result<()> {
    let config = DemoConfig::load()?;
    debug!("{:#?}", config);

    let credential = Credential::from_env(&config.api_key_env)?;
    let client = OpenAiEngineClient::new(&config, credential)?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_movie_recommender(&mut console, &client, &config)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
