//! 业务逻辑层
//!
//! 每个领域一个服务，服务方法即"操作"：需要认证的操作接收
//! `&Principal`，在进入存储层之前完成角色与所有权检查。

pub mod assignments;
pub mod auth;
pub mod class_members;
pub mod classes;
pub mod courses;
pub mod grades;
pub mod permissions;
pub mod students;
pub mod submissions;
pub mod teachers;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use class_members::ClassMemberService;
pub use classes::ClassService;
pub use courses::CourseService;
pub use grades::GradeService;
pub use permissions::PermissionService;
pub use students::StudentService;
pub use submissions::SubmissionService;
pub use teachers::TeacherService;
