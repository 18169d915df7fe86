/// Limits enforced by export validation.
///
/// Deserializable from RON; fields that are left out keep their default.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Counted in characters, not bytes.
    pub max_vendor_length: usize,
    /// Counted in characters, not bytes.
    pub max_description_length: usize,
    /// Inclusive upper bound for both amount columns, in yen.
    pub max_amount: i64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_vendor_length: 50,
            max_description_length: 100,
            max_amount: 1_000_000_000,
        }
    }
}
