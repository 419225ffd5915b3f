pub mod db;
pub mod models;
pub mod telemetry;
pub mod test_environment;
pub mod traits;
pub mod utils;

pub use db::config::DatabaseConfig;
pub use db::error::DatabaseError;
pub use db::memory::InMemoryAssignmentStore;
pub use db::pool::DatabasePool;
pub use db::repositories::AssignmentRepository;
pub use models::{Assignment, AssignmentDocument, AssignmentKey};
pub use traits::AssignmentStore;
