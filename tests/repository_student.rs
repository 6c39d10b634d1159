mod common;

use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use student_management::AppError;
use student_management::application::services::StudentService;
use student_management::domain::entities::UpdateStudent;
use student_management::domain::repositories::StudentRepository;
use student_management::infrastructure::persistence::PgStudentRepository;

fn repo(pool: &PgPool) -> PgStudentRepository {
    PgStudentRepository::new(Arc::new(pool.clone()))
}

#[sqlx::test]
async fn test_create_student(pool: PgPool) {
    let repo = repo(&pool);

    let mut new = common::new_student("Jane", "Doe", "jane@x.com");
    new.phone_number = Some("+1 555 0100".to_string());
    new.date_of_birth = NaiveDate::from_ymd_opt(2001, 9, 30);
    new.address = Some("1 Main St".to_string());

    let student = repo.create(new).await.unwrap();

    assert!(student.id > 0);
    assert_eq!(student.first_name, "Jane");
    assert_eq!(student.last_name, "Doe");
    assert_eq!(student.email, "jane@x.com");
    assert_eq!(student.phone_number.as_deref(), Some("+1 555 0100"));
    assert_eq!(student.date_of_birth, NaiveDate::from_ymd_opt(2001, 9, 30));
    assert_eq!(student.address.as_deref(), Some("1 Main St"));
    assert_eq!(student.course.as_deref(), Some("CS"));
    assert!(student.is_active);
}

#[sqlx::test]
async fn test_create_duplicate_email_is_conflict(pool: PgPool) {
    let repo = repo(&pool);

    repo.create(common::new_student("Jane", "Doe", "jane@x.com"))
        .await
        .unwrap();

    let err = repo
        .create(common::new_student("Other", "Person", "jane@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
    assert_eq!(err.to_string(), "Email 'jane@x.com' already exists.");
    assert_eq!(common::count_students(&pool).await, 1);
}

#[sqlx::test]
async fn test_ids_are_not_reused(pool: PgPool) {
    let repo = repo(&pool);

    let first = repo
        .create(common::new_student("A", "One", "a@x.com"))
        .await
        .unwrap();
    assert!(repo.delete(first.id).await.unwrap());

    let second = repo
        .create(common::new_student("B", "Two", "b@x.com"))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test]
async fn test_find_by_id_and_email(pool: PgPool) {
    let id = common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    let repo = repo(&pool);

    let by_id = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "jane@x.com");

    let by_email = repo.find_by_email("jane@x.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, id);

    assert!(repo.find_by_id(id + 1000).await.unwrap().is_none());
    // Email lookup is an exact, case-sensitive match.
    assert!(repo.find_by_email("JANE@x.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_exists_by_email(pool: PgPool) {
    common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    let repo = repo(&pool);

    assert!(repo.exists_by_email("jane@x.com").await.unwrap());
    assert!(!repo.exists_by_email("john@x.com").await.unwrap());
}

#[sqlx::test]
async fn test_find_by_last_name_and_course(pool: PgPool) {
    common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    common::create_test_student(&pool, "John", "Doe", "john@x.com").await;
    common::create_inactive_student(&pool, "Ann", "Lee", "ann@x.com").await;
    let repo = repo(&pool);

    let does = repo.find_by_last_name("Doe").await.unwrap();
    assert_eq!(does.len(), 2);

    let cs = repo.find_by_course("CS").await.unwrap();
    assert_eq!(cs.len(), 2);
    assert!(cs.iter().all(|s| s.course.as_deref() == Some("CS")));

    assert!(repo.find_by_course("cs").await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_find_by_active(pool: PgPool) {
    common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    common::create_inactive_student(&pool, "Ann", "Lee", "ann@x.com").await;
    let repo = repo(&pool);

    let active = repo.find_by_active(true).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email, "jane@x.com");

    let inactive = repo.find_by_active(false).await.unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].email, "ann@x.com");
}

#[sqlx::test]
async fn test_search_by_name_is_case_insensitive_substring(pool: PgPool) {
    common::create_test_student(&pool, "Anna", "Smith", "anna@x.com").await;
    common::create_test_student(&pool, "Susan", "Lee", "susan@x.com").await;
    common::create_test_student(&pool, "Bob", "Hanson", "bob@x.com").await;
    common::create_test_student(&pool, "Carl", "Webb", "carl@x.com").await;
    let repo = repo(&pool);

    let found = repo.search_by_name("an").await.unwrap();
    let emails: Vec<&str> = found.iter().map(|s| s.email.as_str()).collect();

    assert_eq!(emails, vec!["anna@x.com", "susan@x.com", "bob@x.com"]);

    let upper = repo.search_by_name("SMI").await.unwrap();
    assert_eq!(upper.len(), 1);
}

#[sqlx::test]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    common::create_test_student(&pool, "Anna", "Smith", "anna@x.com").await;
    let repo = repo(&pool);

    assert!(repo.search_by_name("%").await.unwrap().is_empty());
    assert!(repo.search_by_name("_").await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let id = common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    let repo = repo(&pool);

    let update = UpdateStudent {
        first_name: "Janet".to_string(),
        last_name: "Roe".to_string(),
        email: "janet@x.com".to_string(),
        phone_number: Some("555-0199".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(1999, 12, 31),
        address: None,
        course: None,
        is_active: false,
    };

    let updated = repo.update(id, update).await.unwrap().unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.first_name, "Janet");
    assert_eq!(updated.email, "janet@x.com");
    assert!(updated.course.is_none());
    assert!(!updated.is_active);
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: PgPool) {
    let repo = repo(&pool);

    let update = UpdateStudent {
        first_name: "Nobody".to_string(),
        last_name: "Here".to_string(),
        email: "nobody@x.com".to_string(),
        phone_number: None,
        date_of_birth: None,
        address: None,
        course: None,
        is_active: true,
    };

    assert!(repo.update(42, update).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_to_taken_email_is_conflict(pool: PgPool) {
    common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    let id = common::create_test_student(&pool, "John", "Doe", "john@x.com").await;
    let repo = repo(&pool);

    let update = UpdateStudent {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone_number: None,
        date_of_birth: None,
        address: None,
        course: Some("CS".to_string()),
        is_active: true,
    };

    let err = repo.update(id, update).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    let unchanged = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(unchanged.email, "john@x.com");
}

#[sqlx::test]
async fn test_set_active_touches_only_flag(pool: PgPool) {
    let id = common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    let repo = repo(&pool);

    let before = repo.find_by_id(id).await.unwrap().unwrap();
    let after = repo.set_active(id, false).await.unwrap().unwrap();

    assert!(!after.is_active);
    assert_eq!(after.first_name, before.first_name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.course, before.course);

    assert!(repo.set_active(id + 1000, true).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let id = common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    let repo = repo(&pool);

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
}

#[sqlx::test]
async fn test_counts(pool: PgPool) {
    common::create_test_student(&pool, "Jane", "Doe", "jane@x.com").await;
    common::create_test_student(&pool, "John", "Doe", "john@x.com").await;
    common::create_inactive_student(&pool, "Ann", "Lee", "ann@x.com").await;
    let repo = repo(&pool);

    assert_eq!(repo.count_by_status().await.unwrap(), (3, 2));
}

#[sqlx::test]
async fn test_find_all_ordered_by_id(pool: PgPool) {
    let a = common::create_test_student(&pool, "A", "One", "a@x.com").await;
    let b = common::create_test_student(&pool, "B", "Two", "b@x.com").await;
    let repo = repo(&pool);

    let all = repo.find_all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![a, b]);
}

#[sqlx::test]
async fn test_stats_consistent_during_concurrent_inserts(pool: PgPool) {
    let service = StudentService::new(Arc::new(repo(&pool)));

    let writer_pool = pool.clone();
    let writer = tokio::spawn(async move {
        for i in 0..500 {
            common::create_test_student(&writer_pool, "Load", "Test", &format!("load{i}@x.com"))
                .await;
        }
    });

    while !writer.is_finished() {
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.inactive, 0, "all inserted students are active: {stats:?}");
        assert_eq!(stats.total, stats.active + stats.inactive);
    }
    writer.await.unwrap();

    let stats = service.stats().await.unwrap();
    assert_eq!((stats.total, stats.active, stats.inactive), (500, 500, 0));
}
