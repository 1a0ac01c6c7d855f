use tracing::info;

use super::CourseService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_student;
use crate::models::auth::entities::Principal;

pub async fn enroll(
    service: &CourseService,
    principal: &Principal,
    course_id: i64,
) -> Result<bool> {
    // 学生只能为自己选课
    let student_id = require_student(principal)?;

    if service.storage.get_course_by_id(course_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Course {course_id} not found"
        )));
    }

    // 重复选课返回 false，是信号而不是错误
    let enrolled = service
        .storage
        .enroll_student_in_course(student_id, course_id, None)
        .await?;

    if enrolled {
        info!("学生 {} 选课 {} 成功", student_id, course_id);
    }
    Ok(enrolled)
}
