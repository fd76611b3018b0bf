use facelog_core::models::AttendanceRecord;
use facelog_core::AppError;
use sqlx::SqlitePool;

/// Append-only attendance log repository
///
/// One row per successful upload pipeline run. Rows are never updated or
/// deleted; `list_all` re-queries fresh on each call. Timestamps are coarse
/// (one second), so ordering ties are broken by insertion order via the
/// autoincrement id.
#[derive(Clone)]
pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the attendance table if it doesn't exist.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS attendance (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                faces INTEGER NOT NULL,
                image_path TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert one record and return its id.
    pub async fn append(
        &self,
        timestamp: &str,
        faces: i64,
        image_path: &str,
    ) -> Result<i64, AppError> {
        let result =
            sqlx::query("INSERT INTO attendance (timestamp, faces, image_path) VALUES (?, ?, ?)")
                .bind(timestamp)
                .bind(faces)
                .bind(image_path)
                .execute(&self.pool)
                .await?;

        let id = result.last_insert_rowid();
        tracing::info!(id, faces, image_path = %image_path, "Attendance record appended");
        Ok(id)
    }

    /// All records, newest first. Equal timestamps order by most recent insert.
    pub async fn list_all(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, timestamp, faces, image_path FROM attendance ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
