pub mod record;
pub mod transcript;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::Principal;
use crate::models::enrollments::entities::TranscriptEntry;
use crate::storage::Storage;

pub struct GradeService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 录入成绩，仅限教师；对缺失的选课记录自愈
    pub async fn record_grade(
        &self,
        principal: &Principal,
        student_id: i64,
        course_id: i64,
        grade: f64,
    ) -> Result<()> {
        record::record_grade(self, principal, student_id, course_id, grade).await
    }

    // 学生成绩单
    pub async fn transcript(&self, student_id: i64) -> Result<Vec<TranscriptEntry>> {
        transcript::transcript(self, student_id).await
    }
}
