use std::fmt;
use std::str::FromStr;

/// Movie genres the recommender knows a prompt for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Action,
    Romance,
    Comedy,
    Fantasy,
    Thriller,
    Musical,
    Drama,
    Documentary,
    Biographical,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Romance,
        Genre::Comedy,
        Genre::Fantasy,
        Genre::Thriller,
        Genre::Musical,
        Genre::Drama,
        Genre::Documentary,
        Genre::Biographical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Romance => "romance",
            Genre::Comedy => "comedy",
            Genre::Fantasy => "fantasy",
            Genre::Thriller => "thriller",
            Genre::Musical => "musical",
            Genre::Drama => "drama",
            Genre::Documentary => "documentary",
            Genre::Biographical => "biographical",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not one of [`Genre::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl fmt::Display for UnknownGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Genre::ALL.iter().map(Genre::as_str).collect();
        write!(
            f,
            "unknown genre '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownGenre {}

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == token)
            .ok_or_else(|| UnknownGenre(s.trim().to_string()))
    }
}

/// Everything the recommender prints about one movie
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub genre: Genre,
    pub information: String,
    pub review: String,
    /// Raw completion text; asked for as a bare number but never enforced
    pub rating: String,
}

impl MovieRecord {
    /// The rating as a number, when the API complied with the requested format
    pub fn numeric_rating(&self) -> Option<f64> {
        self.rating.trim().parse::<f64>().ok().filter(|r| r.is_finite())
    }
}

/// Meal planner input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealPlanRequest {
    pub total_calories: u32,
    pub num_meals: u32,
    pub num_snacks: u32,
}

/// Per-serving macro-nutrients in grams
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutrition {
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanRecord {
    pub total_calories: u32,
    pub num_meals: u32,
    pub num_snacks: u32,
    pub daily_menu: String,
    /// `None` when the response carried no usable nutrition block
    pub nutrition: Option<Nutrition>,
}
