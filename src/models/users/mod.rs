pub mod entities;
pub mod requests;

pub use entities::User;
pub use requests::RegisterUserRequest;
