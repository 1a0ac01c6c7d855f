//! 关系账本：选课、成绩、班级成员与权限关联

mod common;

use common::{TestCore, seed_student, seed_teacher, student_principal, teacher_principal};
use rust_edusystem_core::models::classes::requests::CreateClassRequest;
use rust_edusystem_core::models::courses::requests::CreateCourseRequest;
use rust_edusystem_core::models::permissions::requests::CreatePermissionRequest;

#[tokio::test]
async fn double_enroll_keeps_single_row() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;

    let course = core
        .ctx
        .courses
        .create_course(
            &teacher_principal(&teacher),
            CreateCourseRequest {
                course_name: "Databases".to_string(),
                credit: 4,
            },
        )
        .await
        .unwrap();

    let principal = student_principal(&student);
    let first = core.ctx.courses.enroll(&principal, course.id).await.unwrap();
    let second = core.ctx.courses.enroll(&principal, course.id).await.unwrap();

    // 第二次是"已选"信号，不是错误
    assert!(first);
    assert!(!second);

    let courses = core
        .ctx
        .courses
        .student_courses(student.student.id)
        .await
        .unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, course.id);
}

#[tokio::test]
async fn concurrent_enroll_creates_one_row() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;

    let course = core
        .ctx
        .courses
        .create_course(
            &teacher_principal(&teacher),
            CreateCourseRequest {
                course_name: "Operating Systems".to_string(),
                credit: 3,
            },
        )
        .await
        .unwrap();

    let principal = student_principal(&student);
    let (first, second) = tokio::join!(
        core.ctx.courses.enroll(&principal, course.id),
        core.ctx.courses.enroll(&principal, course.id),
    );

    // 恰好一个成功创建关联行
    let successes = [first.unwrap(), second.unwrap()]
        .iter()
        .filter(|&&created| created)
        .count();
    assert_eq!(successes, 1);

    let courses = core
        .ctx
        .courses
        .student_courses(student.student.id)
        .await
        .unwrap();
    assert_eq!(courses.len(), 1);
}

#[tokio::test]
async fn course_creation_links_teacher_once() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;

    let course = core
        .ctx
        .courses
        .create_course(
            &teacher_principal(&teacher),
            CreateCourseRequest {
                course_name: "Logic".to_string(),
                credit: 2,
            },
        )
        .await
        .unwrap();

    // 创建时已在同一事务里建立授课关联，再关联一次只报"已关联"信号
    let linked = core
        .ctx
        .storage
        .add_teacher_to_course(teacher.teacher.id, course.id)
        .await
        .unwrap();
    assert!(!linked);
}

#[tokio::test]
async fn record_grade_overwrites_single_row() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    let principal = teacher_principal(&teacher);

    let course = core
        .ctx
        .courses
        .create_course(
            &principal,
            CreateCourseRequest {
                course_name: "Algorithms".to_string(),
                credit: 4,
            },
        )
        .await
        .unwrap();

    core.ctx
        .courses
        .enroll(&student_principal(&student), course.id)
        .await
        .unwrap();

    core.ctx
        .grades
        .record_grade(&principal, student.student.id, course.id, 3.2)
        .await
        .unwrap();
    core.ctx
        .grades
        .record_grade(&principal, student.student.id, course.id, 3.9)
        .await
        .unwrap();

    let transcript = core.ctx.grades.transcript(student.student.id).await.unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].grade, Some(3.9));
}

#[tokio::test]
async fn record_grade_self_heals_missing_enrollment() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;
    let principal = teacher_principal(&teacher);

    let course = core
        .ctx
        .courses
        .create_course(
            &principal,
            CreateCourseRequest {
                course_name: "Networks".to_string(),
                credit: 3,
            },
        )
        .await
        .unwrap();

    // 未选课直接录成绩：补插选课记录
    core.ctx
        .grades
        .record_grade(&principal, student.student.id, course.id, 4.0)
        .await
        .unwrap();

    let transcript = core.ctx.grades.transcript(student.student.id).await.unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].course_id, course.id);
    assert_eq!(transcript[0].grade, Some(4.0));
}

#[tokio::test]
async fn class_membership_join_and_leave() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;
    let student = seed_student(&core, "xiaoming").await;

    let class = core
        .ctx
        .classes
        .create_class(CreateClassRequest {
            class_name: "CS-1".to_string(),
            grade_level: "2026".to_string(),
        })
        .await
        .unwrap();

    let first = core
        .ctx
        .class_members
        .add_student(student.student.id, class.id)
        .await
        .unwrap();
    let second = core
        .ctx
        .class_members
        .add_student(student.student.id, class.id)
        .await
        .unwrap();
    assert!(first);
    assert!(!second);

    let roster = core.ctx.class_members.class_students(class.id).await.unwrap();
    assert_eq!(roster.len(), 1);

    let principal = teacher_principal(&teacher);
    let removed = core
        .ctx
        .class_members
        .remove_student(&principal, student.student.id, class.id)
        .await
        .unwrap();
    assert!(removed);

    // 无成员关系时返回 false，不报错
    let removed_again = core
        .ctx
        .class_members
        .remove_student(&principal, student.student.id, class.id)
        .await
        .unwrap();
    assert!(!removed_again);
}

#[tokio::test]
async fn permission_assignment_is_unique() {
    let core = TestCore::new().await;
    let student = seed_student(&core, "xiaoming").await;

    let permission = core
        .ctx
        .permissions
        .create_permission(CreatePermissionRequest {
            permission_name: "records.read".to_string(),
            description: Some("Read academic records".to_string()),
        })
        .await
        .unwrap();

    let first = core
        .ctx
        .permissions
        .assign_to_user(student.user.id, permission.id)
        .await
        .unwrap();
    let second = core
        .ctx
        .permissions
        .assign_to_user(student.user.id, permission.id)
        .await
        .unwrap();
    assert!(first);
    assert!(!second);

    let permissions = core
        .ctx
        .permissions
        .user_permissions(student.user.id)
        .await
        .unwrap();
    assert_eq!(permissions.len(), 1);
    assert_eq!(permissions[0].permission_name, "records.read");
}
