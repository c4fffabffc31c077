pub mod json;
pub mod md;

use crate::error::DevrankError;
use crate::types::result::RankedResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(results: &[RankedResult], format: OutputFormat) -> Result<String, DevrankError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(DevrankError::Json),
        OutputFormat::Md => Ok(md::to_markdown(results)),
    }
}
