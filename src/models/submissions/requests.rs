use serde::{Deserialize, Serialize};

/// 提交作业请求，携带作业文件的原始文件名与内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub file_name: String,
    pub content: Vec<u8>,
}
