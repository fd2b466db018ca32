//! Property-based tests for parameter merging.
//!
//! Merge is the one operation every resolution path leans on (rule tables
//! accumulate through it, defaults apply through it), so its invariants
//! are checked over arbitrary combinations of present and absent fields.

use proptest::option;
use proptest::prelude::*;

use dwca::TableParameters;

/// Any field value, including delimiters with control characters.
fn field_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(",".to_string()),
        Just("\t".to_string()),
        Just("\r\n".to_string()),
        Just("\"".to_string()),
        "[a-zA-Z0-9:/\\.]{1,30}",
    ]
}

prop_compose! {
    fn table_parameters()(
        row_type in option::of(field_value()),
        encoding in option::of(field_value()),
        fields_terminated_by in option::of(field_value()),
        lines_terminated_by in option::of(field_value()),
        fields_enclosed_by in option::of(field_value()),
        ignore_header_lines in option::of(0u32..100),
    ) -> TableParameters {
        TableParameters {
            row_type,
            encoding,
            fields_terminated_by,
            lines_terminated_by,
            fields_enclosed_by,
            ignore_header_lines,
        }
    }
}

proptest! {
    /// Field-wise left bias: the left operand's value wins whenever present.
    #[test]
    fn merge_is_left_biased(a in table_parameters(), b in table_parameters()) {
        let merged = a.merge(&b);
        prop_assert_eq!(&merged.row_type, &a.row_type.clone().or(b.row_type.clone()));
        prop_assert_eq!(&merged.encoding, &a.encoding.clone().or(b.encoding.clone()));
        prop_assert_eq!(
            &merged.fields_terminated_by,
            &a.fields_terminated_by.clone().or(b.fields_terminated_by.clone())
        );
        prop_assert_eq!(
            &merged.lines_terminated_by,
            &a.lines_terminated_by.clone().or(b.lines_terminated_by.clone())
        );
        prop_assert_eq!(
            &merged.fields_enclosed_by,
            &a.fields_enclosed_by.clone().or(b.fields_enclosed_by.clone())
        );
        prop_assert_eq!(merged.ignore_header_lines, a.ignore_header_lines.or(b.ignore_header_lines));
    }

    /// Merging with an empty parameter set changes nothing, on either side.
    #[test]
    fn empty_is_the_merge_identity(a in table_parameters()) {
        let empty = TableParameters::default();
        prop_assert_eq!(&a.merge(&empty), &a);
        prop_assert_eq!(&empty.merge(&a), &a);
    }

    /// A field present in either operand is present in the result.
    #[test]
    fn merge_never_loses_fields(a in table_parameters(), b in table_parameters()) {
        let merged = a.merge(&b);
        prop_assert_eq!(
            merged.row_type.is_some(),
            a.row_type.is_some() || b.row_type.is_some()
        );
        prop_assert_eq!(
            merged.ignore_header_lines.is_some(),
            a.ignore_header_lines.is_some() || b.ignore_header_lines.is_some()
        );
    }

    /// Merging the same value twice is the same as merging it once.
    #[test]
    fn merge_is_idempotent(a in table_parameters()) {
        prop_assert_eq!(&a.merge(&a), &a);
    }
}
