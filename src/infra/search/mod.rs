pub mod criteria;
pub mod duration;
pub mod predicate;

use crate::infra::mongo::{MongoRepError, Recipe};
use self::criteria::FilterCriteria;
use self::predicate::matches_criteria;
use serde::Serialize;

pub const PAGE_SIZE: usize = 12;

/// Read side of the recipe collection: every record matching an optional
/// case-insensitive name substring, in store order.
pub trait RecipeStore {
    fn find_by_name(&self, name: Option<&str>) -> Result<Vec<Recipe>, MongoRepError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub recipes: Vec<Recipe>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Runs one search end to end: name pushdown to the store, in-memory
/// predicate filtering over the full candidate set, then pagination. Pages
/// past the end come back empty with `total_pages` still reporting the true
/// count.
pub fn run_search(
    store: &impl RecipeStore,
    criteria: &FilterCriteria,
) -> Result<PageResult, MongoRepError> {
    let candidates = store.find_by_name(criteria.name.as_deref())?;
    let matching: Vec<Recipe> = candidates
        .into_iter()
        .filter(|recipe| matches_criteria(recipe, criteria))
        .collect();
    let total_pages = matching.len().div_ceil(PAGE_SIZE);
    let recipes = matching
        .into_iter()
        .skip((criteria.page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();
    Ok(PageResult {
        recipes,
        total_pages,
        current_page: criteria.page,
    })
}
