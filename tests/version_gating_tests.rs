//! Version gating across record kinds: features unlocked by a database
//! version are present at every later version and absent at every
//! earlier one.

use dxfcodec::entities::{Arc, Attdef, Block, Circle, Entity, Insert, Line, Text};
use dxfcodec::tables::{Appid, Dimstyle, Layer, Ltype, Style, TableRecord, Ucs, View, Vport};
use dxfcodec::types::{AcadVersion, Handle, Vector3};

/// The code line of every emitted pair, in order.
fn codes(text: &str) -> Vec<String> {
    text.lines().step_by(2).map(str::to_string).collect()
}

fn assert_code_subset(older: &str, newer: &str) {
    let mut newer_codes = codes(newer);
    for code in codes(older) {
        let position = newer_codes.iter().position(|c| *c == code);
        assert!(
            position.is_some(),
            "code {} emitted by the older version is missing from the newer output",
            code
        );
        newer_codes.remove(position.unwrap());
    }
}

/// For every adjacent version pair, the older output's codes are a
/// subset of the newer output's codes, holding all field values equal.
fn assert_monotonic(render: impl Fn(AcadVersion) -> String) {
    for pair in AcadVersion::ALL.windows(2) {
        let older = render(pair[0]);
        let newer = render(pair[1]);
        assert_code_subset(&older, &newer);
    }
}

#[test]
fn circle_codes_are_monotonic_in_version() {
    assert_monotonic(|v| {
        Circle::from_center_radius(Vector3::new(1.0, 2.0, 0.0), 4.0, v)
            .with_handle(Handle::new(0x50))
            .render()
    });
}

#[test]
fn line_codes_are_monotonic_in_version() {
    assert_monotonic(|v| {
        Line::from_points(Vector3::ZERO, Vector3::new(3.0, 3.0, 0.0), v)
            .with_handle(Handle::new(0x51))
            .render()
    });
}

#[test]
fn arc_codes_are_monotonic_in_version() {
    assert_monotonic(|v| {
        Arc::from_center(Vector3::ZERO, 2.0, 10.0, 200.0, v)
            .with_handle(Handle::new(0x52))
            .render()
    });
}

#[test]
fn text_codes_are_monotonic_in_version() {
    assert_monotonic(|v| {
        Text::at(Vector3::new(5.0, 5.0, 0.0), 2.5, "U3", v)
            .with_handle(Handle::new(0x53))
            .render()
    });
}

#[test]
fn attdef_codes_are_monotonic_in_version() {
    assert_monotonic(|v| {
        Attdef::at("REF", Vector3::ZERO, 2.0, "U?", v)
            .with_handle(Handle::new(0x54))
            .render()
    });
}

#[test]
fn insert_codes_are_monotonic_in_version() {
    assert_monotonic(|v| {
        Insert::at("NAND", Vector3::new(10.0, 10.0, 0.0), v)
            .with_handle(Handle::new(0x55))
            .render()
    });
}

#[test]
fn table_record_codes_are_monotonic_in_version() {
    assert_monotonic(|v| Layer::new("WIRES", v).with_handle(Handle::new(0x60)).render());
    assert_monotonic(|v| Ltype::continuous(v).with_handle(Handle::new(0x61)).render());
    assert_monotonic(|v| Style::standard(v).with_handle(Handle::new(0x62)).render());
    assert_monotonic(|v| Vport::active(v).with_handle(Handle::new(0x63)).render());
    assert_monotonic(|v| View::new("V", v).with_handle(Handle::new(0x64)).render());
    assert_monotonic(|v| Appid::acad(v).with_handle(Handle::new(0x65)).render());
    assert_monotonic(|v| Dimstyle::standard(v).with_handle(Handle::new(0x66)).render());
    assert_monotonic(|v| Ucs::new("U", v).with_handle(Handle::new(0x67)).render());
}

#[test]
fn block_codes_are_monotonic_in_version() {
    assert_monotonic(|v| {
        Block::new("GATE", v)
            .with_handles(Handle::new(0x70), Handle::new(0x71))
            .with_description("A gate")
            .render()
    });
}

#[test]
fn circle_r10_omits_handle_and_subclasses() {
    let text = Circle::from_center_radius(Vector3::ZERO, 5.0, AcadVersion::R10)
        .with_layer("0")
        .render();
    assert!(!text.contains("AcDbEntity"));
    assert!(!text.contains("AcDbCircle"));
    assert!(!codes(&text).contains(&"5".to_string()));
}

#[test]
fn circle_r2000_emits_handle_then_subclasses_before_radius() {
    let text = Circle::from_center_radius(Vector3::ZERO, 5.0, AcadVersion::R2000)
        .with_handle(Handle::new(0x51))
        .with_layer("0")
        .render();
    let handle = text.find("5\n51\n").expect("handle pair");
    let entity = text.find("100\nAcDbEntity\n").expect("entity subclass");
    let circle = text.find("100\nAcDbCircle\n").expect("circle subclass");
    let radius = text.find("40\n5.0\n").expect("radius pair");
    assert!(handle < entity && entity < circle && circle < radius);
}

#[test]
fn dimstyle_r2000_handle_is_code_105() {
    let text = Dimstyle::standard(AcadVersion::R2000)
        .with_handle(Handle::new(0x42))
        .render();
    let emitted = codes(&text);
    assert!(emitted.contains(&"105".to_string()));
    assert!(!emitted.contains(&"5".to_string()));
}

#[test]
fn block_description_requires_r2000() {
    for version in AcadVersion::ALL {
        let text = Block::new("G", version)
            .with_handles(Handle::new(1), Handle::new(2))
            .with_description("Quad NAND")
            .render();
        assert_eq!(
            text.contains("4\nQuad NAND\n"),
            version == AcadVersion::R2000,
            "description gating wrong at {}",
            version
        );
    }
}
