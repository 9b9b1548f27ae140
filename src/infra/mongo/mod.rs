pub mod api;
pub mod types;

pub use self::api::{MongoRep, MongoRepError};
pub use self::types::Recipe;
