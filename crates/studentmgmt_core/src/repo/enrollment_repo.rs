//! Enrollment store contract and SQLite implementation.
//!
//! # Invariants
//! - Write paths call `Enrollment::validate()` before SQL mutations.
//! - Both link targets (`student_id`, `course_id`) are checked for existence
//!   before every write; a missing side fails with `NotFound` naming it.
//! - Status values are persisted as the upstream wire strings (`ACTIVE`,
//!   `COMPLETED`, ...); unknown persisted values are rejected on read.

use crate::model::enrollment::{Enrollment, EnrollmentId, EnrollmentStatus};
use crate::repo::{ensure_connection_ready, row_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const ENROLLMENT_SELECT_SQL: &str = "SELECT
    id,
    student_id,
    course_id,
    enrollment_date,
    grade,
    status
FROM enrollments";

/// Backing store capability for enrollment records.
pub trait EnrollmentStore {
    /// Returns every enrollment in primary-key order.
    fn find_all(&self) -> RepoResult<Vec<Enrollment>>;
    /// Returns one enrollment, or `None` when the id matches nothing.
    fn find_by_id(&self, id: EnrollmentId) -> RepoResult<Option<Enrollment>>;
    /// Inserts (id absent) or fully replaces (id present) one enrollment.
    fn save(&self, enrollment: &Enrollment) -> RepoResult<Enrollment>;
    /// Removes one enrollment; fails with `NotFound` when the id matches
    /// nothing.
    fn delete_by_id(&self, id: EnrollmentId) -> RepoResult<()>;
}

/// SQLite-backed enrollment store.
pub struct SqliteEnrollmentStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEnrollmentStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "enrollments",
            &[
                "id",
                "student_id",
                "course_id",
                "enrollment_date",
                "grade",
                "status",
            ],
        )?;
        Ok(Self { conn })
    }

    fn check_link_targets(&self, enrollment: &Enrollment) -> RepoResult<()> {
        if !row_exists(self.conn, "students", enrollment.student_id)? {
            return Err(RepoError::NotFound {
                entity: "student",
                id: enrollment.student_id,
            });
        }
        if !row_exists(self.conn, "courses", enrollment.course_id)? {
            return Err(RepoError::NotFound {
                entity: "course",
                id: enrollment.course_id,
            });
        }
        Ok(())
    }
}

impl EnrollmentStore for SqliteEnrollmentStore<'_> {
    fn find_all(&self) -> RepoResult<Vec<Enrollment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENROLLMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut enrollments = Vec::new();

        while let Some(row) = rows.next()? {
            enrollments.push(parse_enrollment_row(row)?);
        }

        Ok(enrollments)
    }

    fn find_by_id(&self, id: EnrollmentId) -> RepoResult<Option<Enrollment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENROLLMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_enrollment_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, enrollment: &Enrollment) -> RepoResult<Enrollment> {
        enrollment.validate()?;
        self.check_link_targets(enrollment)?;

        match enrollment.id {
            None => {
                self.conn.execute(
                    "INSERT INTO enrollments (
                        student_id,
                        course_id,
                        enrollment_date,
                        grade,
                        status
                    ) VALUES (?1, ?2, ?3, ?4, ?5);",
                    params![
                        enrollment.student_id,
                        enrollment.course_id,
                        enrollment.enrollment_date.as_deref(),
                        enrollment.grade,
                        status_to_db(enrollment.status),
                    ],
                )?;

                let mut saved = enrollment.clone();
                saved.id = Some(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE enrollments
                     SET
                        student_id = ?1,
                        course_id = ?2,
                        enrollment_date = ?3,
                        grade = ?4,
                        status = ?5,
                        updated_at = (strftime('%s', 'now') * 1000)
                     WHERE id = ?6;",
                    params![
                        enrollment.student_id,
                        enrollment.course_id,
                        enrollment.enrollment_date.as_deref(),
                        enrollment.grade,
                        status_to_db(enrollment.status),
                        id,
                    ],
                )?;

                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: "enrollment",
                        id,
                    });
                }

                Ok(enrollment.clone())
            }
        }
    }

    fn delete_by_id(&self, id: EnrollmentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM enrollments WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "enrollment",
                id,
            });
        }

        Ok(())
    }
}

fn parse_enrollment_row(row: &Row<'_>) -> RepoResult<Enrollment> {
    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in enrollments.status"
        ))
    })?;

    let enrollment = Enrollment {
        id: Some(row.get("id")?),
        student_id: row.get("student_id")?,
        course_id: row.get("course_id")?,
        enrollment_date: row.get("enrollment_date")?,
        grade: row.get("grade")?,
        status,
    };
    enrollment.validate().map_err(|err| {
        RepoError::InvalidData(format!("enrollments row {:?}: {err}", enrollment.id))
    })?;
    Ok(enrollment)
}

fn status_to_db(status: EnrollmentStatus) -> &'static str {
    match status {
        EnrollmentStatus::Active => "ACTIVE",
        EnrollmentStatus::Completed => "COMPLETED",
        EnrollmentStatus::Dropped => "DROPPED",
        EnrollmentStatus::Failed => "FAILED",
        EnrollmentStatus::Withdrawn => "WITHDRAWN",
    }
}

fn parse_status(value: &str) -> Option<EnrollmentStatus> {
    match value {
        "ACTIVE" => Some(EnrollmentStatus::Active),
        "COMPLETED" => Some(EnrollmentStatus::Completed),
        "DROPPED" => Some(EnrollmentStatus::Dropped),
        "FAILED" => Some(EnrollmentStatus::Failed),
        "WITHDRAWN" => Some(EnrollmentStatus::Withdrawn),
        _ => None,
    }
}
