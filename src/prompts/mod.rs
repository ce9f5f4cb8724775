//! Fixed prompt templates sent to the completion API.

mod meal;
mod movie;

pub use meal::meal_plan_prompt;
pub use movie::{
    genre_review_prompt, information_prompt, rating_prompt, review_prompt, sanitize_title,
    title_prompt,
};
