// src/cell_id/token.rs

use crate::constants::{MAX_TOKEN_LEN, NULL_TOKEN};
use crate::types::{CellError, CellId, Result};

impl CellId {
  /// Converts the cell id into its token: lowercase hex with trailing zeros removed.
  /// The zero id is encoded as `"X"`.
  #[must_use]
  pub fn to_token(self) -> String {
    if self.0 == 0 {
      return NULL_TOKEN.to_string();
    }
    let hex = format!("{:016x}", self.0);
    hex.trim_end_matches('0').to_string()
  }

  /// Parses a token back into a cell id.
  ///
  /// # Arguments
  /// * `token` - 1 to 16 hex digits (either case), as produced by [`CellId::to_token`].
  ///
  /// # Returns
  /// `Ok(CellId)` on success, or `CellError::InvalidToken` naming the token if the text is
  /// not hex, is too long, or does not decode to a valid cell.
  pub fn from_token(token: &str) -> Result<CellId> {
    let invalid = || CellError::InvalidToken {
      token: token.to_string(),
    };
    if token.is_empty() || token.len() > MAX_TOKEN_LEN || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(invalid());
    }
    let value = u64::from_str_radix(token, 16).map_err(|_| invalid())?;
    let id = CellId(value << (4 * (MAX_TOKEN_LEN - token.len())));
    if !id.is_valid() {
      return Err(invalid());
    }
    Ok(id)
  }
}

/// Parses a serialized cell set: tokens separated by whitespace and/or commas.
///
/// All-or-nothing: the first malformed token fails the whole set and no ids are returned.
pub fn cells_from_tokens(text: &str) -> Result<Vec<CellId>> {
  text
    .split(|c: char| c == ',' || c.is_whitespace())
    .filter(|t| !t.is_empty())
    .map(CellId::from_token)
    .collect()
}

/// Serializes a cell set as newline-separated tokens.
#[must_use]
pub fn cells_to_tokens(cells: &[CellId]) -> String {
  cells.iter().map(|c| c.to_token()).collect::<Vec<_>>().join("\n")
}
