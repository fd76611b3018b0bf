use serde::Serialize;

/// One row of the attendance log.
///
/// `timestamp` is stored as TEXT with second granularity
/// (`%Y-%m-%d %H:%M:%S`), so lexicographic order matches chronological order.
/// `image_path` is the storage key of the annotated image, relative to the
/// public static root.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct AttendanceRecord {
    pub id: i64,
    pub timestamp: String,
    pub faces: i64,
    pub image_path: String,
}

/// One entry of `GET /attendance`, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntryResponse {
    pub timestamp: String,
    pub faces: i64,
    pub image_path: String,
    pub image_url: String,
}

/// Response body for a successful `POST /upload`.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub result_image_url: String,
    pub original_image_url: String,
    pub faces_detected: usize,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_shape() {
        let response = UploadResponse {
            success: true,
            result_image_url: "/static/uploads/detected_ab_cat.png".to_string(),
            original_image_url: "/static/uploads/ab_cat.png".to_string(),
            faces_detected: 2,
            timestamp: "2026-08-30 12:00:00".to_string(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["success"], true);
        assert_eq!(json["faces_detected"], 2);
        assert!(json["result_image_url"].as_str().is_some());
        assert!(json["original_image_url"].as_str().is_some());
        assert!(json["timestamp"].as_str().is_some());
    }

    #[test]
    fn test_attendance_entry_shape() {
        let entry = AttendanceEntryResponse {
            timestamp: "2026-08-30 12:00:00".to_string(),
            faces: 0,
            image_path: "uploads/detected_ab_cat.png".to_string(),
            image_url: "/static/uploads/detected_ab_cat.png".to_string(),
        };
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["faces"], 0);
        assert_eq!(json["image_path"], "uploads/detected_ab_cat.png");
        assert_eq!(json["image_url"], "/static/uploads/detected_ab_cat.png");
    }
}
