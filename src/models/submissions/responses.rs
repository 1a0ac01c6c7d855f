use serde::{Deserialize, Serialize};

use crate::models::submissions::entities::Submission;

/// 下载提交时返回的记录与文件内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionFile {
    pub submission: Submission,
    pub content: Vec<u8>,
}
