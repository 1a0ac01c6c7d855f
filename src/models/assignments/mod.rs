pub mod entities;
pub mod requests;

pub use entities::Assignment;
pub use requests::CreateAssignmentRequest;
