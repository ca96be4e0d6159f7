//! Compact URL form of a piece's column selections.
//!
//! # Format
//!
//! ```text
//! F1S,SO:0,HD
//! ```
//!
//! One comma-separated token per column, left to right. A token is a short
//! template code, optionally followed by `:0` when the column's door is shown
//! open. A token without a suffix means the door is closed, which keeps links
//! created before door toggling existed valid.
//!
//! Unknown template ids encode as the canonical fallback code, unknown codes
//! decode as the canonical fallback template; both are logged.

use crate::models::ColumnSelection;
use serde::Serialize;
use tracing::warn;

/// Template id used when a template or code is not recognised.
pub const FALLBACK_TEMPLATE_ID: &str = "SHELVES_ONLY";

/// Code of [`FALLBACK_TEMPLATE_ID`].
pub const FALLBACK_CODE: &str = "SO";

const SEPARATOR: &str = ",";
const DOOR_SEPARATOR: char = ':';
const DOOR_OPEN: &str = "0";

/// Code table, template id to code. Both columns are unique.
const CODES: &[(&str, &str)] = &[
    ("FULL_HANGING", "FH"),
    ("FULL_HANGING_WITH_1_SHELF", "F1S"),
    ("DOUBLE_HANGING", "DH"),
    ("HANGING_WITH_DRAWERS", "HD"),
    ("SHELVES_ONLY", "SO"),
    ("SHELVES_WITH_DRAWERS", "SD"),
    ("HANGING_SHELVES_DRAWERS", "HSD"),
    ("RACK_OPEN", "RO"),
    ("RACK_LOWER_DOORS", "RLD"),
    ("RACK_TOP_DOORS", "RTD"),
    ("RACK_FULL_DOORS", "RFD"),
    ("RACK_DRAWERS", "RDR"),
];

/// Returns the URL code of a template id.
#[must_use]
pub fn code_for(template_id: &str) -> Option<&'static str> {
    CODES
        .iter()
        .find(|(id, _)| *id == template_id)
        .map(|&(_, code)| code)
}

/// Returns the template id of a URL code. Codes are case-sensitive.
#[must_use]
pub fn template_for(code: &str) -> Option<&'static str> {
    CODES
        .iter()
        .find(|(_, known)| *known == code)
        .map(|&(id, _)| id)
}

/// Encodes column selections as a URL string.
#[must_use]
pub fn encode(selections: &[ColumnSelection]) -> String {
    selections
        .iter()
        .map(|selection| {
            let code = code_for(&selection.template_id).unwrap_or_else(|| {
                warn!(
                    template = %selection.template_id,
                    fallback = FALLBACK_CODE,
                    "template has no URL code"
                );
                FALLBACK_CODE
            });

            if selection.has_door {
                code.to_string()
            } else {
                format!("{code}{DOOR_SEPARATOR}{DOOR_OPEN}")
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Decoded URL with the codes that had to be substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DecodeReport {
    /// One selection per token
    pub columns: Vec<ColumnSelection>,
    /// Tokens whose code was not recognised, in order of appearance
    pub unknown_codes: Vec<String>,
}

impl DecodeReport {
    /// Returns true if every code was recognised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unknown_codes.is_empty()
    }
}

/// Decodes a URL string into column selections.
#[must_use]
pub fn decode(encoded: &str) -> Vec<ColumnSelection> {
    decode_with_report(encoded).columns
}

/// Decodes a URL string and reports substituted codes.
///
/// - an empty (or all-whitespace) string yields no columns
/// - surrounding whitespace of each token is ignored
/// - any suffix other than `:0` leaves the door closed
#[must_use]
pub fn decode_with_report(encoded: &str) -> DecodeReport {
    let mut report = DecodeReport::default();
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return report;
    }

    for token in encoded.split(SEPARATOR) {
        let token = token.trim();
        let (code, door) = match token.split_once(DOOR_SEPARATOR) {
            Some((code, door)) => (code.trim(), Some(door.trim())),
            None => (token, None),
        };

        let template_id = template_for(code).unwrap_or_else(|| {
            warn!(code, fallback = FALLBACK_TEMPLATE_ID, "unknown template code in URL");
            report.unknown_codes.push(code.to_string());
            FALLBACK_TEMPLATE_ID
        });

        report.columns.push(ColumnSelection::new(
            template_id,
            door != Some(DOOR_OPEN),
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use std::collections::HashSet;

    #[test]
    fn test_encode_reference_example() {
        let selections = vec![
            ColumnSelection::new("FULL_HANGING_WITH_1_SHELF", true),
            ColumnSelection::new("SHELVES_ONLY", false),
        ];
        let encoded = encode(&selections);
        assert_eq!(encoded, "F1S,SO:0");
        assert_eq!(decode(&encoded), selections);
    }

    #[test]
    fn test_round_trip_every_known_template() {
        let selections: Vec<ColumnSelection> = CODES
            .iter()
            .enumerate()
            .map(|(idx, (id, _))| ColumnSelection::new(*id, idx % 3 != 0))
            .collect();
        assert_eq!(decode(&encode(&selections)), selections);
    }

    #[test]
    fn test_code_table_is_bijective_and_matches_catalog() {
        let ids: HashSet<_> = CODES.iter().map(|(id, _)| id).collect();
        let codes: HashSet<_> = CODES.iter().map(|(_, code)| code).collect();
        assert_eq!(ids.len(), CODES.len());
        assert_eq!(codes.len(), CODES.len());
        for (id, code) in CODES {
            assert!(catalog().contains(id), "{id} is not in the catalog");
            assert!((2..=3).contains(&code.len()), "{code}");
        }
        assert_eq!(code_for(FALLBACK_TEMPLATE_ID), Some(FALLBACK_CODE));
    }

    #[test]
    fn test_missing_suffix_means_closed() {
        let decoded = decode("FH,HD");
        assert!(decoded.iter().all(|s| s.has_door));
    }

    #[test]
    fn test_unknown_code_decodes_to_fallback() {
        let report = decode_with_report("FH,XYZ:0,DH");
        assert_eq!(report.unknown_codes, vec!["XYZ".to_string()]);
        assert!(!report.is_clean());
        assert_eq!(
            report.columns[1],
            ColumnSelection::new(FALLBACK_TEMPLATE_ID, false)
        );
        assert_eq!(report.columns.len(), 3);
    }

    #[test]
    fn test_unknown_template_encodes_as_fallback() {
        let encoded = encode(&[ColumnSelection::new("SOMETHING_NEW", false)]);
        assert_eq!(encoded, "SO:0");
    }

    #[test]
    fn test_empty_string_has_no_columns() {
        assert!(decode("").is_empty());
        assert!(decode("   ").is_empty());
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_tolerates_whitespace_and_other_suffixes() {
        let decoded = decode(" F1S : 0 , RO:1 ");
        assert_eq!(
            decoded,
            vec![
                ColumnSelection::new("FULL_HANGING_WITH_1_SHELF", false),
                ColumnSelection::new("RACK_OPEN", true),
            ]
        );
    }

    #[test]
    fn test_empty_token_is_unknown() {
        let report = decode_with_report("FH,,DH");
        assert_eq!(report.columns.len(), 3);
        assert_eq!(report.unknown_codes, vec![String::new()]);
    }
}
