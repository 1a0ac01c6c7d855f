use tracing::info;

use super::GradeService;
use crate::errors::{EduSystemError, Result};
use crate::gate::require_teacher;
use crate::models::auth::entities::Principal;

pub async fn record_grade(
    service: &GradeService,
    principal: &Principal,
    student_id: i64,
    course_id: i64,
    grade: f64,
) -> Result<()> {
    require_teacher(principal)?;

    if service.storage.get_student_by_id(student_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Student {student_id} not found"
        )));
    }
    if service.storage.get_course_by_id(course_id).await?.is_none() {
        return Err(EduSystemError::not_found(format!(
            "Course {course_id} not found"
        )));
    }

    // 存储层 upsert：有选课记录则更新成绩，否则补插选课记录
    service
        .storage
        .record_grade(student_id, course_id, grade)
        .await?;

    info!(
        "教师 {} 录入成绩: 学生 {} 课程 {} 成绩 {}",
        principal.username, student_id, course_id, grade
    );
    Ok(())
}
