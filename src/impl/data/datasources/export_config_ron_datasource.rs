use crate::{entities::ExportConfig, errors::ExportError};

impl ExportConfig {
    /// Parses a RON struct such as `(max_vendor_length: 40)`. Omitted fields
    /// keep their defaults.
    pub fn from_ron_str(s: &str) -> Result<ExportConfig, ExportError> {
        Ok(ron::from_str(s)?)
    }

    pub async fn from_ron_file<P>(path: P) -> Result<ExportConfig, ExportError>
    where
        P: AsRef<std::path::Path>,
    {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_ron_str(&content)
    }
}
