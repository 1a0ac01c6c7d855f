use serde::{Deserialize, Serialize};

// 班级业务模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub class_name: String,
    pub grade_level: String,
}
