pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::Submission;
pub use requests::SubmitAssignmentRequest;
pub use responses::SubmissionFile;
