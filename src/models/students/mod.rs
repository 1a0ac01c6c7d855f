pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::Student;
pub use requests::{CreateStudentRequest, UpdateStudentRequest};
pub use responses::StudentProfile;
