use rocket::FromForm;
use std::str::FromStr;

pub const DEFAULT_NUTRITION_OP: &str = "lt";

/// Raw query parameters as they arrive on the wire. Everything is optional
/// and string-valued; interpretation happens in [`FilterCriteria`].
#[derive(Debug, Default, FromForm)]
pub struct SearchParams {
    pub name: Option<String>,
    #[field(name = "minIngredients")]
    pub min_ingredients: Option<String>,
    #[field(name = "maxIngredients")]
    pub max_ingredients: Option<String>,
    #[field(name = "prepTimeMin")]
    pub prep_time_min: Option<String>,
    #[field(name = "prepTimeMax")]
    pub prep_time_max: Option<String>,
    #[field(name = "cookTimeMin")]
    pub cook_time_min: Option<String>,
    #[field(name = "cookTimeMax")]
    pub cook_time_max: Option<String>,
    #[field(name = "nutritionKey")]
    pub nutrition_key: Option<String>,
    #[field(name = "nutritionOp")]
    pub nutrition_op: Option<String>,
    #[field(name = "nutritionValue")]
    pub nutrition_value: Option<String>,
    pub page: Option<String>,
}

/// One validated search request. Absent numeric fields mean "no constraint
/// on this dimension", never a constraint of zero.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub min_ingredients: Option<usize>,
    pub max_ingredients: Option<usize>,
    pub prep_time_min: Option<u32>,
    pub prep_time_max: Option<u32>,
    pub cook_time_min: Option<u32>,
    pub cook_time_max: Option<u32>,
    pub nutrition_key: Option<String>,
    // Kept raw so unrecognized operators keep their pass-through semantics.
    pub nutrition_op: String,
    pub nutrition_value: Option<f64>,
    pub page: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            name: None,
            min_ingredients: None,
            max_ingredients: None,
            prep_time_min: None,
            prep_time_max: None,
            cook_time_min: None,
            cook_time_max: None,
            nutrition_key: None,
            nutrition_op: String::from(DEFAULT_NUTRITION_OP),
            nutrition_value: None,
            page: 1,
        }
    }
}

impl From<SearchParams> for FilterCriteria {
    fn from(params: SearchParams) -> Self {
        FilterCriteria {
            name: params.name.filter(|name| !name.is_empty()),
            min_ingredients: parse_number(&params.min_ingredients),
            max_ingredients: parse_number(&params.max_ingredients),
            prep_time_min: parse_number(&params.prep_time_min),
            prep_time_max: parse_number(&params.prep_time_max),
            cook_time_min: parse_number(&params.cook_time_min),
            cook_time_max: parse_number(&params.cook_time_max),
            nutrition_key: params.nutrition_key.filter(|key| !key.is_empty()),
            nutrition_op: params
                .nutrition_op
                .filter(|op| !op.is_empty())
                .unwrap_or_else(|| String::from(DEFAULT_NUTRITION_OP)),
            nutrition_value: parse_number(&params.nutrition_value),
            page: parse_number::<usize>(&params.page)
                .filter(|page| *page >= 1)
                .unwrap_or(1),
        }
    }
}

// Lenient by contract: input that does not parse means "no constraint",
// never an error.
fn parse_number<T: FromStr>(raw: &Option<String>) -> Option<T> {
    raw.as_deref().and_then(|value| value.trim().parse().ok())
}
