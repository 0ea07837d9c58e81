//! Graph database access
//!
//! A narrow seam between the gateway and Neo4j: driver-native values and
//! records, the session traits, and the HTTP transactional-API driver.

pub mod driver;
pub mod http_driver;
pub mod record;
pub mod value;

pub use driver::{GraphDriver, GraphError, GraphSession, Statement};
pub use http_driver::HttpGraphDriver;
pub use record::Record;
pub use value::DbValue;
