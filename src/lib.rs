pub mod config;
pub mod credential;
pub mod error;
pub mod extract;
pub mod format;
pub mod input;
pub mod model;
pub mod pipelines;
pub mod prompts;
pub mod providers;
pub mod request;

use std::io::{BufRead, Write};

pub use crate::config::{DemoConfig, ProgramConfig};
pub use crate::credential::Credential;
pub use crate::error::{DemoError, Result, Stage};
pub use crate::extract::{extract_completion, Completion};
pub use crate::input::Console;
pub use crate::model::{Genre, MealPlanRecord, MealPlanRequest, MovieRecord, Nutrition};
pub use crate::providers::{CompletionProvider, OpenAiEngineClient};
pub use crate::request::CompletionRequest;

/// Ask for a genre, fetch the four movie fields and print them.
pub fn run_movie_recommender<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    provider: &dyn CompletionProvider,
    config: &DemoConfig,
) -> Result<MovieRecord> {
    let genre = console.ask_genre()?;
    let movie = pipelines::movie::run(provider, &config.movie, genre)?;
    format::write_movie(console.writer_mut(), &movie)?;
    Ok(movie)
}

/// Ask for calories, meals and snacks, fetch a menu and print it.
pub fn run_meal_planner<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    provider: &dyn CompletionProvider,
    config: &DemoConfig,
) -> Result<MealPlanRecord> {
    let request = console.ask_meal_plan()?;
    let plan = pipelines::meal::run(provider, &config.meal, request)?;
    format::write_meal_plan(console.writer_mut(), &plan)?;
    Ok(plan)
}
