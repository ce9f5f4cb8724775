use std::io::Write;

use crate::model::{MealPlanRecord, MovieRecord};

/// Replace newlines, carriage returns and tabs with a single space each.
/// Every other character, non-ASCII included, is kept as is.
pub fn sanitize_display(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect()
}

pub fn write_movie(out: &mut impl Write, movie: &MovieRecord) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "==== 영화 정보 ====")?;
    writeln!(out, "영화 제목:{}", sanitize_display(&movie.title))?;
    writeln!(out, "영화 장르:  {}", movie.genre)?;
    writeln!(out, "영화 소개:{}", sanitize_display(&movie.information))?;
    writeln!(out, "영화 리뷰:{}", sanitize_display(&movie.review))?;
    writeln!(out, "영화 평점:{}", sanitize_display(&movie.rating))?;
    Ok(())
}

pub fn write_meal_plan(out: &mut impl Write, plan: &MealPlanRecord) -> std::io::Result<()> {
    writeln!(out, "Daily Menu: {}", sanitize_display(&plan.daily_menu))?;
    match &plan.nutrition {
        Some(nutrition) => {
            writeln!(out, "Nutrition Information (per serving):")?;
            writeln!(out, "Carbohydrates: {} grams", nutrition.carbohydrates)?;
            writeln!(out, "Protein: {} grams", nutrition.protein)?;
            writeln!(out, "Fat: {} grams", nutrition.fat)?;
        }
        None => writeln!(out, "Nutrition Information not available.")?,
    }
    Ok(())
}
