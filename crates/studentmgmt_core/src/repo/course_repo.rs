//! Course store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `courses` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Course::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `save` with an identifier that matches no row fails with `NotFound`;
//!   creation goes through the id-absent path only.

use crate::model::course::{Course, CourseId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const COURSE_SELECT_SQL: &str = "SELECT
    id,
    name,
    code,
    credit,
    description
FROM courses";

/// Backing store capability for course records.
///
/// Concrete implementations are injected into [`crate::service::CourseService`]
/// at construction.
pub trait CourseStore {
    /// Returns every course in primary-key order.
    fn find_all(&self) -> RepoResult<Vec<Course>>;
    /// Returns one course, or `None` when the id matches nothing.
    fn find_by_id(&self, id: CourseId) -> RepoResult<Option<Course>>;
    /// Inserts (id absent) or fully replaces (id present) one course and
    /// returns the persisted record including its assigned id.
    fn save(&self, course: &Course) -> RepoResult<Course>;
    /// Removes one course; fails with `NotFound` when the id matches nothing.
    fn delete_by_id(&self, id: CourseId) -> RepoResult<()>;
}

/// SQLite-backed course store.
pub struct SqliteCourseStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "courses", &["id", "name", "code", "credit", "description"])?;
        Ok(Self { conn })
    }
}

impl CourseStore for SqliteCourseStore<'_> {
    fn find_all(&self) -> RepoResult<Vec<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut courses = Vec::new();

        while let Some(row) = rows.next()? {
            courses.push(parse_course_row(row)?);
        }

        Ok(courses)
    }

    fn find_by_id(&self, id: CourseId) -> RepoResult<Option<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_course_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, course: &Course) -> RepoResult<Course> {
        course.validate()?;

        match course.id {
            None => {
                self.conn.execute(
                    "INSERT INTO courses (name, code, credit, description)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        course.name.as_str(),
                        course.code.as_str(),
                        course.credit,
                        course.description.as_deref(),
                    ],
                )?;

                let mut saved = course.clone();
                saved.id = Some(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE courses
                     SET
                        name = ?1,
                        code = ?2,
                        credit = ?3,
                        description = ?4,
                        updated_at = (strftime('%s', 'now') * 1000)
                     WHERE id = ?5;",
                    params![
                        course.name.as_str(),
                        course.code.as_str(),
                        course.credit,
                        course.description.as_deref(),
                        id,
                    ],
                )?;

                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: "course",
                        id,
                    });
                }

                Ok(course.clone())
            }
        }
    }

    fn delete_by_id(&self, id: CourseId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM courses WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "course",
                id,
            });
        }

        Ok(())
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    let course = Course {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        code: row.get("code")?,
        credit: row.get("credit")?,
        description: row.get("description")?,
    };
    course
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("courses row {:?}: {err}", course.id)))?;
    Ok(course)
}
