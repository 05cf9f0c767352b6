mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, BASE_URL, ENDPOINT_PATH, REFERER, REQUEST_TIMEOUT, USER_AGENT};
pub use self::errors::Error;
pub use self::query::{MonsterQuery, DEFAULT_BATCH_SIZE, DEFAULT_LANG};
