//! 课程、选课与成绩存储操作
//!
//! 选课与授课关联都以复合主键兜底唯一性，插入使用单条带冲突处理的
//! 语句；录入成绩是 upsert，不要求学生已有选课记录。

use super::SeaOrmStorage;
use crate::entity::prelude::{
    CourseActiveModel, Courses, StudentCourseActiveModel, StudentCourses, Students,
    TeacherCourseActiveModel, TeacherCourses,
};
use crate::entity::{
    student_courses::Column as StudentCourseColumn, teacher_courses::Column as TeacherCourseColumn,
};
use crate::errors::{EduSystemError, Result};
use crate::models::courses::{
    entities::Course, requests::CreateCourseRequest, responses::CourseStudent,
};
use crate::models::enrollments::entities::TranscriptEntry;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 创建课程并关联授课教师（单事务，不留无人授课的课程）
    pub async fn create_course_impl(
        &self,
        teacher_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let model = CourseActiveModel {
            course_name: Set(req.course_name),
            credit: Set(req.credit),
            ..Default::default()
        };
        let course = model.insert(&txn).await.map_err(EduSystemError::from)?;

        let link = TeacherCourseActiveModel {
            teacher_id: Set(teacher_id),
            course_id: Set(course.id),
        };
        TeacherCourses::insert(link)
            .exec_without_returning(&txn)
            .await
            .map_err(EduSystemError::from)?;

        txn.commit()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(course.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程
    pub async fn list_courses_impl(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Course>> {
        let mut select = Courses::find().order_by_asc(crate::entity::courses::Column::Id);
        if let Some(skip) = skip {
            select = select.offset(skip);
        }
        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        let result = select
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    /// 教师关联课程，已关联时返回 false
    pub async fn add_teacher_to_course_impl(&self, teacher_id: i64, course_id: i64) -> Result<bool> {
        let model = TeacherCourseActiveModel {
            teacher_id: Set(teacher_id),
            course_id: Set(course_id),
        };

        let result = TeacherCourses::insert(model)
            .on_conflict(
                OnConflict::columns([
                    TeacherCourseColumn::TeacherId,
                    TeacherCourseColumn::CourseId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;

        // 冲突时语句命中 0 行（部分后端报 RecordNotInserted），都算"已关联"
        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// 学生选课，已选时返回 false（"已选"是信号而非错误）
    pub async fn enroll_student_in_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
        grade: Option<f64>,
    ) -> Result<bool> {
        let model = StudentCourseActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            grade: Set(grade),
        };

        let result = StudentCourses::insert(model)
            .on_conflict(
                OnConflict::columns([
                    StudentCourseColumn::StudentId,
                    StudentCourseColumn::CourseId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;

        match result {
            Ok(rows) if rows > 0 => Ok(true),
            Ok(_) | Err(DbErr::RecordNotInserted) => {
                debug!("学生 {} 已选课程 {}，忽略重复选课", student_id, course_id);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 录入成绩：有选课记录则更新成绩，否则插入带成绩的选课记录
    ///
    /// 单条 upsert 语句，幂等且对缺失的选课记录自愈。
    pub async fn record_grade_impl(
        &self,
        student_id: i64,
        course_id: i64,
        grade: f64,
    ) -> Result<()> {
        let model = StudentCourseActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            grade: Set(Some(grade)),
        };

        StudentCourses::insert(model)
            .on_conflict(
                OnConflict::columns([
                    StudentCourseColumn::StudentId,
                    StudentCourseColumn::CourseId,
                ])
                .update_column(StudentCourseColumn::Grade)
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(())
    }

    /// 课程学生名单（附成绩）
    pub async fn course_students_impl(&self, course_id: i64) -> Result<Vec<CourseStudent>> {
        let result = StudentCourses::find()
            .filter(StudentCourseColumn::CourseId.eq(course_id))
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询课程名单失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|(enrollment, student)| {
                student.map(|m| CourseStudent {
                    student: m.into_student(),
                    grade: enrollment.grade,
                })
            })
            .collect())
    }

    /// 学生已选课程
    pub async fn student_courses_impl(&self, student_id: i64) -> Result<Vec<Course>> {
        let result = StudentCourses::find()
            .filter(StudentCourseColumn::StudentId.eq(student_id))
            .find_also_related(Courses)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询学生课程失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|(_, course)| course.map(|m| m.into_course()))
            .collect())
    }

    /// 学生成绩单：选课记录与课程信息的联查
    pub async fn transcript_impl(&self, student_id: i64) -> Result<Vec<TranscriptEntry>> {
        let result = StudentCourses::find()
            .filter(StudentCourseColumn::StudentId.eq(student_id))
            .find_also_related(Courses)
            .all(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询成绩单失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|(enrollment, course)| {
                course.map(|c| TranscriptEntry {
                    course_id: c.id,
                    course_name: c.course_name,
                    credit: c.credit,
                    grade: enrollment.grade,
                })
            })
            .collect())
    }
}
