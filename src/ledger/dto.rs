use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockDto {
    pub title: String,
    pub count: u32,
}

impl StockDto {
    pub fn new(title: &str, count: u32) -> Self {
        Self {
            title: title.to_string(),
            count,
        }
    }
}
