use super::ask;
use crate::config::ProgramConfig;
use crate::error::{Result, Stage};
use crate::model::{MealPlanRecord, MealPlanRequest};
use crate::prompts::meal_plan_prompt;
use crate::providers::CompletionProvider;

/// Ask for a daily menu in a single request
pub fn run(
    provider: &dyn CompletionProvider,
    config: &ProgramConfig,
    request: MealPlanRequest,
) -> Result<MealPlanRecord> {
    let completion = ask(provider, config, meal_plan_prompt(&request), Stage::MealPlan)?;

    Ok(MealPlanRecord {
        total_calories: request.total_calories,
        num_meals: request.num_meals,
        num_snacks: request.num_snacks,
        daily_menu: completion.text,
        nutrition: completion.nutrition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::error::DemoError;
    use crate::model::Nutrition;
    use crate::pipelines::testing::ScriptedProvider;

    const REQUEST: MealPlanRequest = MealPlanRequest {
        total_calories: 2000,
        num_meals: 3,
        num_snacks: 2,
    };

    #[test]
    fn test_run_single_request() {
        let provider = ScriptedProvider::new(vec![Ok(r#"{
            "choices": [{
                "text": "\n\n아침: 현미밥 150g",
                "attributes": {"nutrition": {"carbohydrates": 250, "protein": 90, "fat": 60}}
            }]
        }"#
        .to_string())]);

        let plan = run(&provider, &DemoConfig::default().meal, REQUEST).unwrap();

        assert_eq!(plan.total_calories, 2000);
        assert_eq!(plan.daily_menu, "\n\n아침: 현미밥 150g");
        assert_eq!(
            plan.nutrition,
            Some(Nutrition {
                carbohydrates: 250.0,
                protein: 90.0,
                fat: 60.0
            })
        );

        let requests = provider.requests.borrow();
        assert_eq!(requests.len(), 1);
        let prompt = requests[0].prompt();
        assert!(prompt.contains("2000"));
        assert!(prompt.contains("3 meals"));
        assert!(prompt.contains("2 snacks"));
        assert_eq!(requests[0].temperature(), Some(0.5));
    }

    #[test]
    fn test_malformed_model_fails_before_any_call() {
        let provider = ScriptedProvider::new(vec![]);
        let mut config = DemoConfig::default().meal;
        config.model = "a/../../v2?x".to_string();

        let err = run(&provider, &config, REQUEST).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::MealPlan));
        assert!(matches!(err.root(), DemoError::InvalidRequest(_)));
        assert!(provider.requests.borrow().is_empty());
    }

    #[test]
    fn test_transport_error_is_tagged() {
        let provider = ScriptedProvider::new(vec![Err(DemoError::HttpStatus {
            status: 500,
            body: "oops".to_string(),
        })]);

        let err = run(&provider, &DemoConfig::default().meal, REQUEST).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::MealPlan));
        assert_eq!(err.to_string(), "meal plan request failed: API returned HTTP 500: oops");
    }
}
