use studentmgmt_core::db::open_db_in_memory;
use studentmgmt_core::{
    Course, CourseStore, Enrollment, EnrollmentService, EnrollmentStatus, EnrollmentStore,
    RepoError, SqliteCourseStore, SqliteEnrollmentStore, SqliteStudentStore, Student, StudentStore,
};
use rusqlite::Connection;

fn seed_student_and_course(conn: &Connection) -> (i64, i64) {
    let students = SqliteStudentStore::try_new(conn).unwrap();
    let courses = SqliteCourseStore::try_new(conn).unwrap();

    let student = students
        .save(&Student::new("Katherine", "Johnson", "katherine@example.edu"))
        .unwrap();
    let course = courses
        .save(&Course::new("Orbital Mechanics", "AE301"))
        .unwrap();
    (student.id.unwrap(), course.id.unwrap())
}

#[test]
fn enrollment_save_and_fetch_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let (student_id, course_id) = seed_student_and_course(&conn);
    let store = SqliteEnrollmentStore::try_new(&conn).unwrap();

    let mut enrollment = Enrollment::new(student_id, course_id);
    enrollment.enrollment_date = Some("2026-09-01".to_string());
    let saved = store.save(&enrollment).unwrap();

    let loaded = store.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.student_id, student_id);
    assert_eq!(loaded.course_id, course_id);
    assert_eq!(loaded.enrollment_date.as_deref(), Some("2026-09-01"));
    assert_eq!(loaded.status, EnrollmentStatus::Active);
    assert_eq!(loaded.grade, 0.0);
}

#[test]
fn enrollment_save_rejects_missing_link_targets() {
    let conn = open_db_in_memory().unwrap();
    let (student_id, course_id) = seed_student_and_course(&conn);
    let store = SqliteEnrollmentStore::try_new(&conn).unwrap();

    let missing_student = Enrollment::new(999, course_id);
    assert!(matches!(
        store.save(&missing_student).unwrap_err(),
        RepoError::NotFound {
            entity: "student",
            id: 999
        }
    ));

    let missing_course = Enrollment::new(student_id, 999);
    assert!(matches!(
        store.save(&missing_course).unwrap_err(),
        RepoError::NotFound {
            entity: "course",
            id: 999
        }
    ));
}

#[test]
fn enrollment_update_replaces_grade_and_status() {
    let conn = open_db_in_memory().unwrap();
    let (student_id, course_id) = seed_student_and_course(&conn);
    let store = SqliteEnrollmentStore::try_new(&conn).unwrap();

    let mut saved = store.save(&Enrollment::new(student_id, course_id)).unwrap();

    saved.grade = 87.5;
    saved.status = EnrollmentStatus::Completed;
    store.save(&saved).unwrap();

    let loaded = store.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.grade, 87.5);
    assert_eq!(loaded.status, EnrollmentStatus::Completed);
}

#[test]
fn enrollment_rejects_out_of_range_grade() {
    let conn = open_db_in_memory().unwrap();
    let (student_id, course_id) = seed_student_and_course(&conn);
    let store = SqliteEnrollmentStore::try_new(&conn).unwrap();

    let mut enrollment = Enrollment::new(student_id, course_id);
    enrollment.grade = 104.0;
    assert!(matches!(
        store.save(&enrollment).unwrap_err(),
        RepoError::Validation(_)
    ));
}

#[test]
fn deleting_student_cascades_to_enrollments() {
    let conn = open_db_in_memory().unwrap();
    let (student_id, course_id) = seed_student_and_course(&conn);
    let enrollments = SqliteEnrollmentStore::try_new(&conn).unwrap();
    let students = SqliteStudentStore::try_new(&conn).unwrap();

    let saved = enrollments
        .save(&Enrollment::new(student_id, course_id))
        .unwrap();
    students.delete_by_id(student_id).unwrap();

    assert!(enrollments.find_by_id(saved.id.unwrap()).unwrap().is_none());
    assert!(enrollments.find_all().unwrap().is_empty());
}

#[test]
fn unknown_persisted_status_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    let (student_id, course_id) = seed_student_and_course(&conn);
    let store = SqliteEnrollmentStore::try_new(&conn).unwrap();

    let saved = store.save(&Enrollment::new(student_id, course_id)).unwrap();
    conn.execute("UPDATE enrollments SET status = 'PAUSED';", [])
        .unwrap();

    let err = store.find_by_id(saved.id.unwrap()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn enrollment_service_wraps_store_calls() {
    let conn = open_db_in_memory().unwrap();
    let (student_id, course_id) = seed_student_and_course(&conn);
    let service = EnrollmentService::new(SqliteEnrollmentStore::try_new(&conn).unwrap());

    let saved = service
        .save_enrollment(&Enrollment::new(student_id, course_id))
        .unwrap();
    let id = saved.id.unwrap();

    assert_eq!(service.get_all_enrollments().unwrap().len(), 1);
    assert_eq!(service.get_enrollment_by_id(id).unwrap().student_id, student_id);

    service.delete_enrollment(id).unwrap();
    assert!(matches!(
        service.get_enrollment_by_id(id).unwrap_err(),
        RepoError::NotFound {
            entity: "enrollment",
            ..
        }
    ));
}
