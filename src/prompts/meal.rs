use crate::model::MealPlanRequest;

/// Ask for a daily menu, answered in Korean with quantities in grams.
pub fn meal_plan_prompt(request: &MealPlanRequest) -> String {
    format!(
        "Plan a daily menu with {} calories, for {} meals and {} snacks을 한국어로 추천해줘 그리고 음식의 양을 g으로 표시해줘",
        request.total_calories, request.num_meals, request.num_snacks
    )
}
