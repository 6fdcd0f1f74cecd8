//! Property tests for the emission and scanning primitives.

use dxfcodec::entities::{Circle, Entity};
use dxfcodec::inspect::{ScanItem, TagStreamScanner};
use dxfcodec::stream::{GroupCodeStream, GroupCodeValue};
use dxfcodec::types::{AcadVersion, Handle, Vector3};
use proptest::prelude::*;

proptest! {
    /// Any pair sequence emits exactly two physical lines per pair and
    /// scans back to the same sequence.
    #[test]
    fn pairs_round_trip_through_the_scanner(
        pairs in prop::collection::vec(
            (1i32..=1071, "[A-Za-z0-9$._-]{1,12}"),
            1..40,
        )
    ) {
        let mut stream = GroupCodeStream::new();
        for (code, value) in &pairs {
            stream.add(*code, value.as_str());
        }
        let text = stream.build();
        prop_assert_eq!(text.lines().count(), pairs.len() * 2);

        let items = TagStreamScanner::scan(&text);
        prop_assert_eq!(items.len(), pairs.len());
        for (item, (code, value)) in items.iter().zip(&pairs) {
            match item {
                ScanItem::Pair { code: c, value: v, .. } => {
                    prop_assert_eq!(c, &code.to_string());
                    prop_assert_eq!(v, value);
                }
                other => prop_assert!(false, "unexpected item {:?}", other),
            }
        }
    }

    /// Real rendering is locale-invariant: always a '.' separator, never
    /// a ',' or exponent, and the text parses back to the same value.
    #[test]
    fn real_rendering_round_trips(value in -1e12f64..1e12) {
        let rendered = GroupCodeValue::Real(value).render();
        prop_assert!(rendered.contains('.'));
        prop_assert!(!rendered.contains(','));
        prop_assert!(!rendered.contains('e') && !rendered.contains('E'));
        let parsed: f64 = rendered.parse().unwrap();
        prop_assert!((parsed - value).abs() <= 1e-9 * value.abs().max(1.0));
    }

    /// Handles render as uppercase hex with no prefix.
    #[test]
    fn handles_render_as_uppercase_hex(raw in 1u64..u64::MAX) {
        let rendered = Handle::new(raw).to_hex();
        prop_assert_eq!(u64::from_str_radix(&rendered, 16).unwrap(), raw);
        prop_assert!(!rendered.chars().any(|c| c.is_ascii_lowercase()));
    }

    /// Raising the version never removes a group code from a record and
    /// never changes the codes the older version already emitted.
    #[test]
    fn circle_emission_is_monotonic_in_version(
        x in -1e6f64..1e6,
        y in -1e6f64..1e6,
        radius in 0.001f64..1e6,
    ) {
        let render = |version| {
            Circle::from_center_radius(Vector3::new(x, y, 0.0), radius, version)
                .with_handle(Handle::new(0x40))
                .render()
        };
        for pair in AcadVersion::ALL.windows(2) {
            let older = render(pair[0]);
            let newer = render(pair[1]);
            let mut remaining: Vec<&str> = newer.lines().step_by(2).collect();
            for code in older.lines().step_by(2) {
                let position = remaining.iter().position(|c| *c == code);
                prop_assert!(position.is_some(), "code {} lost at {}", code, pair[1]);
                remaining.remove(position.unwrap());
            }
        }
    }

    /// The scanner accepts anything without panicking and always balances
    /// its boundaries.
    #[test]
    fn scanner_is_total(input in "[\\x20-\\x7E\\n]{0,400}") {
        let items = TagStreamScanner::scan(&input);
        let opens = items
            .iter()
            .filter(|i| matches!(i, ScanItem::SectionStart { .. }))
            .count();
        let closes = items
            .iter()
            .filter(|i| matches!(i, ScanItem::SectionEnd))
            .count();
        prop_assert_eq!(opens, closes);
    }
}
