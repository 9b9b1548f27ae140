pub mod mongo;
pub mod routes;
pub mod search;

pub use self::mongo::*;
pub use self::routes::*;
