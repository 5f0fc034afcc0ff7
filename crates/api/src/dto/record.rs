use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct RecordResponse {
    pub data: String,
}
