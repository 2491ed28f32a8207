use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct Assistant {
    pub id: i32,
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub salary: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}

/// The eight writable columns, taken verbatim from the request body.
/// Absent fields stay `None` and bind SQL NULL on insert and update.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AssistantFields {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub salary: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}
