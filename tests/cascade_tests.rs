//! 级联删除：教师与班级

mod common;

use chrono::{Duration, Utc};
use common::{TestCore, seed_student, seed_teacher, student_principal, teacher_principal};
use rust_edusystem_core::errors::EduSystemError;
use rust_edusystem_core::models::assignments::requests::CreateAssignmentRequest;
use rust_edusystem_core::models::classes::requests::CreateClassRequest;
use rust_edusystem_core::models::submissions::requests::SubmitAssignmentRequest;

#[tokio::test]
async fn delete_teacher_cascades_everything() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let alice = seed_student(&core, "alice").await;
    let bob = seed_student(&core, "bob").await;
    let t_principal = teacher_principal(&teacher);

    // 两个作业，三份提交
    let a1 = core
        .ctx
        .assignments
        .create_assignment(
            &t_principal,
            CreateAssignmentRequest {
                content: "Homework 1".to_string(),
                deadline: Utc::now() + Duration::days(7),
                status: "open".to_string(),
            },
        )
        .await
        .unwrap();
    let a2 = core
        .ctx
        .assignments
        .create_assignment(
            &t_principal,
            CreateAssignmentRequest {
                content: "Homework 2".to_string(),
                deadline: Utc::now() + Duration::days(7),
                status: "open".to_string(),
            },
        )
        .await
        .unwrap();

    let submit = |principal, assignment_id, name: &str| {
        let request = SubmitAssignmentRequest {
            file_name: format!("{name}.pdf"),
            content: b"answer".to_vec(),
        };
        core.ctx.submissions.submit(principal, assignment_id, request)
    };
    let alice_p = student_principal(&alice);
    let bob_p = student_principal(&bob);
    let s1 = submit(&alice_p, a1.id, "alice-hw1").await.unwrap();
    let s2 = submit(&bob_p, a1.id, "bob-hw1").await.unwrap();
    let s3 = submit(&alice_p, a2.id, "alice-hw2").await.unwrap();

    core.ctx
        .teachers
        .delete_teacher(&t_principal, teacher.teacher.id)
        .await
        .unwrap();

    // 教师、作业、提交与背后的用户账号都不复存在
    assert!(matches!(
        core.ctx.teachers.get_teacher(teacher.teacher.id).await,
        Err(EduSystemError::NotFound(_))
    ));
    for assignment_id in [a1.id, a2.id] {
        assert!(matches!(
            core.ctx.assignments.get_assignment(assignment_id).await,
            Err(EduSystemError::NotFound(_))
        ));
    }
    for submission_id in [s1.id, s2.id, s3.id] {
        assert!(matches!(
            core.ctx.submissions.download(&t_principal, submission_id).await,
            Err(EduSystemError::NotFound(_))
        ));
    }
    let user = core
        .ctx
        .storage
        .get_user_by_id(teacher.user.id)
        .await
        .unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn delete_dual_role_teacher_keeps_user_and_student() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;

    // 同一用户再挂一个学生档案（双角色）
    let student = core
        .ctx
        .storage
        .create_student_profile(teacher.user.id, "2026", "Mathematics")
        .await
        .unwrap();

    let t_principal = teacher_principal(&teacher);
    core.ctx
        .teachers
        .delete_teacher(&t_principal, teacher.teacher.id)
        .await
        .unwrap();

    // 教师档案没了，但用户账号与学生档案保留
    assert!(matches!(
        core.ctx.teachers.get_teacher(teacher.teacher.id).await,
        Err(EduSystemError::NotFound(_))
    ));
    let user = core
        .ctx
        .storage
        .get_user_by_id(teacher.user.id)
        .await
        .unwrap();
    assert!(user.is_some());
    assert!(core.ctx.students.get_student(student.id).await.is_ok());
}

#[tokio::test]
async fn delete_missing_teacher_is_not_found() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;

    let result = core
        .ctx
        .teachers
        .delete_teacher(&teacher_principal(&teacher), 424242)
        .await;
    assert!(matches!(result, Err(EduSystemError::NotFound(_))));
}

#[tokio::test]
async fn delete_class_cascades_memberships() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;

    let class = core
        .ctx
        .classes
        .create_class(CreateClassRequest {
            class_name: "CS-2".to_string(),
            grade_level: "2026".to_string(),
        })
        .await
        .unwrap();

    core.ctx
        .class_members
        .add_student(student.student.id, class.id)
        .await
        .unwrap();

    core.ctx
        .classes
        .delete_class(&teacher_principal(&teacher), class.id)
        .await
        .unwrap();

    assert!(matches!(
        core.ctx.classes.get_class(class.id).await,
        Err(EduSystemError::NotFound(_))
    ));
    // 学生本身不受影响，成员关系已清空
    let classes = core
        .ctx
        .class_members
        .student_classes(student.student.id)
        .await
        .unwrap();
    assert!(classes.is_empty());
    assert!(
        core.ctx
            .students
            .get_student(student.student.id)
            .await
            .is_ok()
    );
}
