pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::Teacher;
pub use requests::{CreateTeacherRequest, UpdateTeacherRequest};
pub use responses::TeacherProfile;
