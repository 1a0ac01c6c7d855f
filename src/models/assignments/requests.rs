use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 布置作业请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    pub content: String,
    pub deadline: DateTime<Utc>,
    pub status: String,
}
