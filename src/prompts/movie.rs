use crate::model::Genre;

impl Genre {
    pub fn review_prompt(&self) -> String {
        format!("Please write a brief review of the famous {} movie.", self.as_str())
    }
}

/// Genre prompt for a raw token; `None` for tokens outside [`Genre::ALL`].
pub fn genre_review_prompt(token: &str) -> Option<String> {
    token.parse::<Genre>().ok().map(|genre| genre.review_prompt())
}

/// Ask for the title of one famous movie in `genre`, and nothing else
pub fn title_prompt(genre: Genre) -> String {
    format!(
        "Please write down the title of a famous {} movie without any other information",
        genre.as_str()
    )
}

/// Keep only ASCII letters and digits, in their original order.
pub fn sanitize_title(title: &str) -> String {
    title.chars().filter(char::is_ascii_alphanumeric).collect()
}

pub fn information_prompt(title: &str) -> String {
    format!("Please write a simple introduction to the {}", sanitize_title(title))
}

pub fn review_prompt(title: &str) -> String {
    format!("Please write a simple review of the {}", sanitize_title(title))
}

pub fn rating_prompt(title: &str) -> String {
    format!(
        "Please write the rating of the {} in numbers without any other information. For example, 1.7 or 4.2 or 8.0",
        sanitize_title(title)
    )
}
