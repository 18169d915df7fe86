use encoding_rs::SHIFT_JIS;

use crate::errors::ExportError;

/// Transcode text to Shift_JIS, failing on the first character that has no
/// Shift_JIS representation instead of substituting it.
pub fn encode_shift_jis(text: &str) -> Result<Vec<u8>, ExportError> {
    let (bytes, _, had_unmappable) = SHIFT_JIS.encode(text);
    if had_unmappable {
        let mut buf = [0u8; 4];
        if let Some(character) = text
            .chars()
            .find(|c| SHIFT_JIS.encode(c.encode_utf8(&mut buf)).2)
        {
            return Err(ExportError::UnmappableCharacter { character });
        }
    }
    Ok(bytes.into_owned())
}
