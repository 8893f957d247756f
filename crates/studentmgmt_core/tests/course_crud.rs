use studentmgmt_core::db::migrations::latest_version;
use studentmgmt_core::db::open_db_in_memory;
use studentmgmt_core::{Course, CourseService, CourseStore, RepoError, SqliteCourseStore};
use rusqlite::Connection;
use std::collections::HashSet;

#[test]
fn save_without_id_assigns_fresh_id_and_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCourseStore::try_new(&conn).unwrap();

    let mut course = Course::new("Data Structures", "CS201");
    course.credit = 6;
    course.description = Some("trees, heaps, graphs".to_string());
    let saved = store.save(&course).unwrap();

    let id = saved.id.expect("save must assign an id");
    let loaded = store.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Data Structures");
    assert_eq!(loaded.code, "CS201");
    assert_eq!(loaded.credit, 6);
    assert_eq!(loaded.description.as_deref(), Some("trees, heaps, graphs"));
    // Equal apart from the assigned identifier.
    assert_eq!(Course { id: None, ..loaded }, course);
}

#[test]
fn assigned_ids_are_unique() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCourseStore::try_new(&conn).unwrap();

    let mut ids = HashSet::new();
    for n in 0..5 {
        let saved = store.save(&Course::new(format!("Course {n}"), "CS101")).unwrap();
        assert!(ids.insert(saved.id.unwrap()), "ids must not repeat");
    }
}

#[test]
fn save_with_existing_id_fully_replaces_attributes() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCourseStore::try_new(&conn).unwrap();

    let mut saved = store.save(&Course::new("Intro Databases", "DB101")).unwrap();

    saved.name = "Advanced Databases".to_string();
    saved.code = "DB301".to_string();
    saved.credit = 9;
    saved.description = None;
    store.save(&saved).unwrap();

    let loaded = store.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn save_with_unmatched_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCourseStore::try_new(&conn).unwrap();

    let course = Course::with_id(999, "Ghost Course", "GH404");
    let err = store.save(&course).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "course",
            id: 999
        }
    ));
}

#[test]
fn delete_removes_record_and_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCourseStore::try_new(&conn).unwrap();

    let saved = store.save(&Course::new("Operating Systems", "OS301")).unwrap();
    let id = saved.id.unwrap();

    store.delete_by_id(id).unwrap();
    assert!(store.find_by_id(id).unwrap().is_none());

    let err = store.delete_by_id(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "course", .. }));
}

#[test]
fn find_all_returns_every_stored_course_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCourseStore::try_new(&conn).unwrap();

    assert!(store.find_all().unwrap().is_empty());

    let first = store.save(&Course::new("Algorithms", "CS301")).unwrap();
    let second = store.save(&Course::new("Compilers", "CS401")).unwrap();
    let third = store.save(&Course::new("Networks", "CS402")).unwrap();
    store.delete_by_id(second.id.unwrap()).unwrap();

    let all = store.find_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, third.id);
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCourseStore::try_new(&conn).unwrap();

    let invalid = Course::new("", "CS101");
    let create_err = store.save(&invalid).unwrap_err();
    assert!(matches!(create_err, RepoError::Validation(_)));

    let mut saved = store.save(&Course::new("Valid", "CS101")).unwrap();
    saved.code = "not a code".to_string();
    let update_err = store.save(&saved).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
}

#[test]
fn service_maps_missing_course_to_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = CourseService::new(SqliteCourseStore::try_new(&conn).unwrap());

    let err = service.get_course_by_id(999).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "course",
            id: 999
        }
    ));
}

#[test]
fn service_wraps_store_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = CourseService::new(SqliteCourseStore::try_new(&conn).unwrap());

    let saved = service
        .save_course(&Course::new("Linear Algebra", "MATH 201"))
        .unwrap();
    let id = saved.id.unwrap();

    let fetched = service.get_course_by_id(id).unwrap();
    assert_eq!(fetched.name, "Linear Algebra");

    assert_eq!(service.get_all_courses().unwrap().len(), 1);

    service.delete_course(id).unwrap();
    assert!(service.get_all_courses().unwrap().is_empty());
    assert!(matches!(
        service.get_course_by_id(id).unwrap_err(),
        RepoError::NotFound { .. }
    ));
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCourseStore::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_required_courses_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCourseStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("courses"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_courses_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            code TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCourseStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "courses",
            column: "credit"
        })
    ));
}
