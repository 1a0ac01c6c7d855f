pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::Course;
pub use requests::{CreateCourseRequest, UpdateCourseRequest};
pub use responses::CourseStudent;
