use std::io::{BufRead, Write};

use log::debug;

use crate::error::{DemoError, Result};
use crate::model::{Genre, MealPlanRequest};

const GENRE_QUESTION: &str = "어떤 장르의 영화를 원하세요? (ex. action, romance, comedy, fantasy, thriller, musical, drama, documentary, biographical): ";

/// Line-oriented console prompts, one value per question
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Print `question` and read one trimmed line. End of input is an error.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(DemoError::InvalidUserInput("no input received".to_string()));
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_u32(&mut self, question: &str) -> Result<u32> {
        let answer = self.ask(question)?;
        answer.parse::<u32>().map_err(|_| {
            DemoError::InvalidUserInput(format!(
                "'{answer}' is not a valid non-negative integer"
            ))
        })
    }

    /// Ask for a genre; tokens outside the known set are rejected
    pub fn ask_genre(&mut self) -> Result<Genre> {
        let answer = self.ask(GENRE_QUESTION)?;
        let genre = answer
            .parse::<Genre>()
            .map_err(|e| DemoError::InvalidUserInput(e.to_string()))?;
        debug!("Selected genre: {}", genre);
        Ok(genre)
    }

    pub fn ask_meal_plan(&mut self) -> Result<MealPlanRequest> {
        writeln!(self.writer, "Welcome to Calorie Planner!")?;
        let total_calories =
            self.ask_u32("Enter the total calories you want to consume in a day: ")?;
        let num_meals = self.ask_u32("Enter the number of meals you want to plan for: ")?;
        let num_snacks = self.ask_u32("Enter the number of snacks you want to plan for: ")?;

        Ok(MealPlanRequest {
            total_calories,
            num_meals,
            num_snacks,
        })
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}
