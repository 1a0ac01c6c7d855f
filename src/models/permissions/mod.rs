pub mod entities;
pub mod requests;

pub use entities::Permission;
pub use requests::{AssignPermissionRequest, CreatePermissionRequest};
