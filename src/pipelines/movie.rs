use log::warn;

use super::ask;
use crate::config::ProgramConfig;
use crate::error::{Result, Stage};
use crate::model::{Genre, MovieRecord};
use crate::prompts::{information_prompt, rating_prompt, review_prompt, title_prompt};
use crate::providers::CompletionProvider;

/// Ask for a title in `genre`, then for an introduction, a review and a
/// rating of that title. Stops at the first failing request.
pub fn run(
    provider: &dyn CompletionProvider,
    config: &ProgramConfig,
    genre: Genre,
) -> Result<MovieRecord> {
    let title = ask(provider, config, title_prompt(genre), Stage::Title)?.text;
    let information = ask(provider, config, information_prompt(&title), Stage::Information)?.text;
    let review = ask(provider, config, review_prompt(&title), Stage::Review)?.text;
    let rating = ask(provider, config, rating_prompt(&title), Stage::Rating)?.text;

    let movie = MovieRecord {
        title,
        genre,
        information,
        review,
        rating,
    };
    if movie.numeric_rating().is_none() {
        warn!("Rating is not a bare number: {:?}", movie.rating.trim());
    }

    Ok(movie)
}
