//! 认证与访问控制：注册、登录、令牌解析与角色检查

mod common;

use chrono::{Duration, Utc};
use common::{TestCore, seed_student, seed_teacher, student_principal, teacher_principal};
use rust_edusystem_core::errors::EduSystemError;
use rust_edusystem_core::models::assignments::requests::CreateAssignmentRequest;
use rust_edusystem_core::models::auth::requests::LoginRequest;
use rust_edusystem_core::models::teachers::requests::UpdateTeacherRequest;
use rust_edusystem_core::models::users::requests::RegisterUserRequest;

fn register_request(username: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: username.to_string(),
        password: "SecurePass123".to_string(),
        email: format!("{username}@example.com"),
    }
}

#[tokio::test]
async fn register_login_authenticate_round_trip() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_wang").await;

    let token = core
        .ctx
        .auth
        .login(LoginRequest {
            username: "prof_wang".to_string(),
            password: "SecurePass123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(token.token_type, "bearer");

    // Bearer 令牌经过门解析出带角色的主体
    let header = format!("Bearer {}", token.access_token);
    let principal = core.ctx.gate.authenticate(Some(&header)).await.unwrap();
    assert_eq!(principal.username, "prof_wang");
    assert_eq!(principal.teacher_id, Some(teacher.teacher.id));
    assert!(principal.student_id.is_none());

    // 第二次走缓存，结果一致
    let cached = core.ctx.gate.authenticate(Some(&header)).await.unwrap();
    assert_eq!(cached.user_id, principal.user_id);
}

#[tokio::test]
async fn password_is_stored_hashed() {
    let core = TestCore::new().await;
    let user = core
        .ctx
        .auth
        .register(register_request("zhangsan"))
        .await
        .unwrap();

    let stored = core
        .ctx
        .storage
        .get_user_by_id(user.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.password_hash.starts_with("$argon2"));
    assert_ne!(stored.password_hash, "SecurePass123");
}

#[tokio::test]
async fn duplicate_username_and_email_are_rejected() {
    let core = TestCore::new().await;
    core.ctx
        .auth
        .register(register_request("zhangsan"))
        .await
        .unwrap();

    // 用户名重复
    let mut same_name = register_request("zhangsan");
    same_name.email = "other@example.com".to_string();
    assert!(matches!(
        core.ctx.auth.register(same_name).await,
        Err(EduSystemError::DuplicateKey(_))
    ));

    // 邮箱重复
    let mut same_email = register_request("lisi");
    same_email.email = "zhangsan@example.com".to_string();
    assert!(matches!(
        core.ctx.auth.register(same_email).await,
        Err(EduSystemError::DuplicateKey(_))
    ));
}

#[tokio::test]
async fn invalid_account_fields_are_rejected() {
    let core = TestCore::new().await;

    let mut bad_email = register_request("zhangsan");
    bad_email.email = "not-an-email".to_string();
    assert!(matches!(
        core.ctx.auth.register(bad_email).await,
        Err(EduSystemError::Validation(_))
    ));

    let mut weak_password = register_request("zhangsan");
    weak_password.password = "short".to_string();
    assert!(matches!(
        core.ctx.auth.register(weak_password).await,
        Err(EduSystemError::Validation(_))
    ));
}

#[tokio::test]
async fn login_failures_share_one_error() {
    let core = TestCore::new().await;
    core.ctx
        .auth
        .register(register_request("zhangsan"))
        .await
        .unwrap();

    // 密码错误与用户不存在不可区分
    let wrong_password = core
        .ctx
        .auth
        .login(LoginRequest {
            username: "zhangsan".to_string(),
            password: "WrongPass123".to_string(),
        })
        .await;
    assert!(matches!(
        wrong_password,
        Err(EduSystemError::Unauthenticated(_))
    ));

    let no_such_user = core
        .ctx
        .auth
        .login(LoginRequest {
            username: "nobody".to_string(),
            password: "SecurePass123".to_string(),
        })
        .await;
    assert!(matches!(
        no_such_user,
        Err(EduSystemError::Unauthenticated(_))
    ));
}

#[tokio::test]
async fn gate_rejects_missing_and_garbage_tokens() {
    let core = TestCore::new().await;

    assert!(matches!(
        core.ctx.gate.authenticate(None).await,
        Err(EduSystemError::Unauthenticated(_))
    ));
    // 缺 Bearer 前缀
    assert!(matches!(
        core.ctx.gate.authenticate(Some("sometoken")).await,
        Err(EduSystemError::Unauthenticated(_))
    ));
    assert!(matches!(
        core.ctx.gate.authenticate(Some("Bearer not.a.jwt")).await,
        Err(EduSystemError::Unauthenticated(_))
    ));
}

#[tokio::test]
async fn profile_resolves_roles_fresh() {
    let core = TestCore::new().await;
    let user = core
        .ctx
        .auth
        .register(register_request("zhangsan"))
        .await
        .unwrap();

    // 注册时无任何角色
    let token = core
        .ctx
        .auth
        .login(LoginRequest {
            username: "zhangsan".to_string(),
            password: "SecurePass123".to_string(),
        })
        .await
        .unwrap();
    let principal = core
        .ctx
        .gate
        .authenticate_token(&token.access_token)
        .await
        .unwrap();
    assert!(principal.student_id.is_none());

    // 挂上学生档案后 profile 能反映新角色，不回显旧主体
    let student = core
        .ctx
        .storage
        .create_student_profile(user.id, "2026", "Physics")
        .await
        .unwrap();
    let refreshed = core.ctx.auth.profile(&principal).await.unwrap();
    assert_eq!(refreshed.student_id, Some(student.id));
}

#[tokio::test]
async fn deleted_account_token_stops_resolving() {
    let core = TestCore::new().await;
    let teacher = seed_teacher(&core, "prof_gone").await;

    let token = core
        .ctx
        .auth
        .login(LoginRequest {
            username: "prof_gone".to_string(),
            password: "SecurePass123".to_string(),
        })
        .await
        .unwrap();

    // 预热主体缓存
    let principal = core
        .ctx
        .gate
        .authenticate_token(&token.access_token)
        .await
        .unwrap();
    assert_eq!(principal.teacher_id, Some(teacher.teacher.id));

    core.ctx
        .teachers
        .delete_teacher(&principal, teacher.teacher.id)
        .await
        .unwrap();

    // 账号已级联删除，缓存不给令牌续命
    assert!(matches!(
        core.ctx.gate.authenticate_token(&token.access_token).await,
        Err(EduSystemError::Unauthenticated(_))
    ));
}

#[tokio::test]
async fn role_checks_guard_teacher_operations() {
    let core = TestCore::new().await;
    let student = seed_student(&core, "xiaoming").await;
    let wang = seed_teacher(&core, "prof_wang").await;
    let li = seed_teacher(&core, "prof_li").await;

    // 学生不能布置作业
    let result = core
        .ctx
        .assignments
        .create_assignment(
            &student_principal(&student),
            CreateAssignmentRequest {
                content: "Homework".to_string(),
                deadline: Utc::now() + Duration::days(7),
                status: "open".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(EduSystemError::Forbidden(_))));

    // 教师不能更新别人的档案
    let result = core
        .ctx
        .teachers
        .update_teacher(
            &teacher_principal(&wang),
            li.teacher.id,
            UpdateTeacherRequest {
                title: Some("Lecturer".to_string()),
                department: None,
            },
        )
        .await;
    assert!(matches!(result, Err(EduSystemError::Forbidden(_))));
}
