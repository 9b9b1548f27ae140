mod infra;
use infra::*;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};
use std::env;

#[macro_use]
extern crate rocket;
pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "Attaching CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    let uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| String::from("mongodb://localhost:27017/"));
    let database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| String::from("miam"));
    log::info!("serving recipe search over database {}", database);
    let db = MongoRep::init(uri, &database).unwrap();
    rocket::build()
        .manage(db)
        .mount("/", routes![search_recipes, health])
        .attach(CORS)
}
