//! 端到端场景：教学流程从建课到成绩单

mod common;

use chrono::{Duration, Utc};
use common::{TestCore, seed_student, seed_teacher, student_principal, teacher_principal};
use rust_edusystem_core::errors::EduSystemError;
use rust_edusystem_core::models::assignments::requests::CreateAssignmentRequest;
use rust_edusystem_core::models::courses::requests::CreateCourseRequest;
use rust_edusystem_core::models::submissions::requests::SubmitAssignmentRequest;

#[tokio::test]
async fn course_to_transcript_flow() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    let t_principal = teacher_principal(&teacher);

    // 建课时自动关联授课教师
    let course = core
        .ctx
        .courses
        .create_course(
            &t_principal,
            CreateCourseRequest {
                course_name: "Compilers".to_string(),
                credit: 4,
            },
        )
        .await
        .unwrap();

    let enrolled = core
        .ctx
        .courses
        .enroll(&student_principal(&student), course.id)
        .await
        .unwrap();
    assert!(enrolled);

    core.ctx
        .grades
        .record_grade(&t_principal, student.student.id, course.id, 3.8)
        .await
        .unwrap();

    // 成绩单恰好一条：该课程、3.8
    let transcript = core.ctx.grades.transcript(student.student.id).await.unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].course_id, course.id);
    assert_eq!(transcript[0].course_name, "Compilers");
    assert_eq!(transcript[0].credit, 4);
    assert_eq!(transcript[0].grade, Some(3.8));

    // 教师端名单上也能看到这名学生与成绩
    let roster = core
        .ctx
        .courses
        .course_students(&t_principal, course.id)
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].student.id, student.student.id);
    assert_eq!(roster[0].grade, Some(3.8));
}

#[tokio::test]
async fn assignments_follow_the_course_teacher() {
    let core = TestCore::new().await;
    let wang = seed_teacher(&core, "prof_wang").await;
    let li = seed_teacher(&core, "prof_li").await;
    let wang_principal = teacher_principal(&wang);

    let course = core
        .ctx
        .courses
        .create_course(
            &wang_principal,
            CreateCourseRequest {
                course_name: "Graphics".to_string(),
                credit: 3,
            },
        )
        .await
        .unwrap();

    core.ctx
        .assignments
        .create_assignment(
            &wang_principal,
            CreateAssignmentRequest {
                content: "Render a triangle".to_string(),
                deadline: Utc::now() + Duration::days(7),
                status: "open".to_string(),
            },
        )
        .await
        .unwrap();
    // 不授这门课的教师布置的作业不算进来
    core.ctx
        .assignments
        .create_assignment(
            &teacher_principal(&li),
            CreateAssignmentRequest {
                content: "Unrelated homework".to_string(),
                deadline: Utc::now() + Duration::days(7),
                status: "open".to_string(),
            },
        )
        .await
        .unwrap();

    let related = core
        .ctx
        .assignments
        .assignments_by_course(course.id)
        .await
        .unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].content, "Render a triangle");
}

#[tokio::test]
async fn full_semester_scenario() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    let t_principal = teacher_principal(&teacher);
    let s_principal = student_principal(&student);

    let course = core
        .ctx
        .courses
        .create_course(
            &t_principal,
            CreateCourseRequest {
                course_name: "Distributed Systems".to_string(),
                credit: 4,
            },
        )
        .await
        .unwrap();
    core.ctx.courses.enroll(&s_principal, course.id).await.unwrap();

    let assignment = core
        .ctx
        .assignments
        .create_assignment(
            &t_principal,
            CreateAssignmentRequest {
                content: "Implement a log replica".to_string(),
                deadline: Utc::now() + Duration::days(14),
                status: "open".to_string(),
            },
        )
        .await
        .unwrap();

    let submission = core
        .ctx
        .submissions
        .submit(
            &s_principal,
            assignment.id,
            SubmitAssignmentRequest {
                file_name: "replica.tar.gz".to_string(),
                content: b"archive bytes".to_vec(),
            },
        )
        .await
        .unwrap();

    // 教师批阅提交，录入成绩
    let listing = core
        .ctx
        .submissions
        .submissions_by_assignment(&t_principal, assignment.id)
        .await
        .unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, submission.id);

    core.ctx
        .grades
        .record_grade(&t_principal, student.student.id, course.id, 4.0)
        .await
        .unwrap();

    let transcript = core.ctx.grades.transcript(student.student.id).await.unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].grade, Some(4.0));

    // 不存在的学生查成绩单仍是 NotFound，而非空表
    assert!(matches!(
        core.ctx.grades.transcript(424242).await,
        Err(EduSystemError::NotFound(_))
    ));
}
