pub mod entities;
pub mod requests;

pub use entities::Class;
pub use requests::{CreateClassRequest, UpdateClassRequest};
