use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpkeepError {
    #[error("Invalid date '{value}' for {field}")]
    InvalidDate { field: &'static str, value: String },
}
