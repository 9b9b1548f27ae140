use super::criteria::FilterCriteria;
use super::duration::parse_duration_minutes;
use crate::infra::mongo::Recipe;

/// Number of real ingredients: entries that are non-null strings with a
/// non-empty trimmed form.
pub fn ingredient_count(ingredients: Option<&[Option<String>]>) -> usize {
    ingredients
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry.as_deref().is_some_and(|s| !s.trim().is_empty()))
                .count()
        })
        .unwrap_or(0)
}

/// True when the recipe satisfies every active constraint. The name
/// constraint is applied at the store level and is not re-checked here.
pub fn matches_criteria(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    let count = ingredient_count(recipe.ingredients.as_deref());
    if criteria.min_ingredients.is_some_and(|min| count < min) {
        return false;
    }
    if criteria.max_ingredients.is_some_and(|max| count > max) {
        return false;
    }
    if !within_bounds(
        parse_duration_minutes(recipe.prep_time.as_deref()),
        criteria.prep_time_min,
        criteria.prep_time_max,
    ) {
        return false;
    }
    if !within_bounds(
        parse_duration_minutes(recipe.cook_time.as_deref()),
        criteria.cook_time_min,
        criteria.cook_time_max,
    ) {
        return false;
    }
    matches_nutrition(recipe, criteria)
}

fn within_bounds(minutes: Option<u32>, min: Option<u32>, max: Option<u32>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    // An unknown duration never satisfies a requested bound.
    let Some(minutes) = minutes else { return false };
    min.map_or(true, |bound| minutes >= bound) && max.map_or(true, |bound| minutes <= bound)
}

fn matches_nutrition(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    let (Some(key), Some(wanted)) = (criteria.nutrition_key.as_deref(), criteria.nutrition_value)
    else {
        return true;
    };
    let stored = recipe
        .nutrition
        .as_ref()
        .and_then(|nutrition| nutrition.get(key))
        .and_then(|values| values.first())
        .and_then(|value| value.trim().parse::<f64>().ok());
    let Some(stored) = stored else { return false };
    match criteria.nutrition_op.as_str() {
        "lt" => stored < wanted,
        "gt" => stored > wanted,
        // Exact equality, no tolerance.
        "eq" => stored == wanted,
        // Unrecognized operators impose no constraint.
        _ => true,
    }
}
