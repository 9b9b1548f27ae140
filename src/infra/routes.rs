use super::mongo::MongoRep;
use super::search::{
    self,
    criteria::{FilterCriteria, SearchParams},
    PageResult,
};
use rocket::get;
use rocket::response::status::Custom;
use rocket::{http::Status, serde::json::Json, State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[get("/recipes?<params..>")]
pub fn search_recipes(
    db: &State<MongoRep>,
    params: SearchParams,
) -> Result<Json<PageResult>, Custom<Json<ErrorMessage>>> {
    let criteria = FilterCriteria::from(params);
    let result = search::run_search(db.inner(), &criteria);

    match result {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            log::error!("recipe search failed: {}", e);
            Err(Custom(
                Status::InternalServerError,
                Json(ErrorMessage {
                    message: e.to_string(),
                }),
            ))
        }
    }
}

#[get("/health")]
pub fn health() -> &'static str {
    "ok"
}
