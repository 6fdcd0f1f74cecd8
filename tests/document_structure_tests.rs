//! Whole-document structural invariants: pairing, section order, table
//! counts, handle uniqueness, and numeric formatting.

use dxfcodec::classes::Class;
use dxfcodec::document::DxfDocument;
use dxfcodec::entities::{Attrib, Block, Circle, Entity, Insert, Line, Lwpolyline, Text};
use dxfcodec::objects::Dictionary;
use dxfcodec::sections::{BlocksSection, ClassesSection, EntitiesSection, ObjectsSection};
use dxfcodec::types::{AcadVersion, Handle, HandleAllocator, Vector3};

/// Build a small but representative drawing: one gate block, one insert
/// with an attribute, loose wiring geometry, and a dictionary.
fn sample_document(version: AcadVersion) -> String {
    let mut alloc = HandleAllocator::default();
    let mut doc = DxfDocument::standard(version, &mut alloc);

    let mut gate = Block::new("NAND2", version).with_handles(alloc.next(), alloc.next());
    gate.push_entity(
        &Line::from_points(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0), version)
            .with_handle(alloc.next()),
    );
    gate.push_entity(
        &Circle::from_center_radius(Vector3::new(11.0, 3.0, 0.0), 1.0, version)
            .with_handle(alloc.next()),
    );
    let mut blocks = BlocksSection::new();
    blocks.add_block(&gate);
    doc.set_blocks(blocks.finish());

    let mut entities = EntitiesSection::new();
    entities.add_entity(
        &Insert::at("NAND2", Vector3::new(40.0, 40.0, 0.0), version)
            .with_handle(alloc.next())
            .with_attributes(),
    );
    entities.add_entity(
        &Attrib::at("REF", Vector3::new(40.0, 48.0, 0.0), 2.5, "U1", version)
            .with_handle(alloc.next()),
    );
    entities.add_entity(
        &Lwpolyline::from_points(&[(0.0, 0.0), (20.0, 0.0), (20.0, 15.0)], version)
            .with_handle(alloc.next()),
    );
    entities.add_entity(
        &Text::at(Vector3::new(5.0, 60.0, 0.0), 3.5, "Half adder", version)
            .with_handle(alloc.next()),
    );
    doc.set_entities(entities.finish());

    let mut root = Dictionary::new(version);
    root.insert("ACAD_GROUP", alloc.next());
    let mut objects = ObjectsSection::new();
    objects.add_dictionary(&root.with_handle(alloc.next()));
    doc.set_objects(objects.finish());

    doc.build()
}

#[test]
fn every_document_has_an_even_line_count() {
    for version in AcadVersion::ALL {
        let text = sample_document(version);
        assert_eq!(
            text.lines().count() % 2,
            0,
            "odd line count at {}",
            version
        );
    }
}

#[test]
fn sections_appear_once_in_canonical_order() {
    for version in AcadVersion::ALL {
        let text = sample_document(version);
        let mut names = Vec::new();
        let lines: Vec<&str> = text.lines().collect();
        for window in lines.windows(4) {
            if window[0] == "0" && window[1] == "SECTION" && window[2] == "2" {
                names.push(window[3]);
            }
        }
        assert_eq!(
            names,
            ["HEADER", "CLASSES", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS"]
        );
        assert_eq!(
            text.matches("0\nSECTION\n").count(),
            text.matches("0\nENDSEC\n").count()
        );
        assert!(text.ends_with("0\nEOF\n"));
    }
}

#[test]
fn document_starts_with_acadver() {
    for version in AcadVersion::ALL {
        let text = sample_document(version);
        let expected = format!(
            "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\n{}\n",
            version.dxf_string()
        );
        assert!(text.starts_with(&expected), "wrong preamble at {}", version);
    }
}

#[test]
fn table_counts_match_contained_records() {
    let text = sample_document(AcadVersion::R2000);
    let lines: Vec<&str> = text.lines().collect();

    let mut index = 0;
    let mut tables_seen = 0;
    while index + 1 < lines.len() {
        if lines[index] == "0" && lines[index + 1] == "TABLE" {
            // (2,name) follows, then optional handle/subclass, then (70,count).
            let name = lines[index + 3];
            let mut cursor = index + 4;
            let mut declared = None;
            while lines[cursor] != "0" {
                if lines[cursor] == "70" {
                    declared = Some(lines[cursor + 1].parse::<usize>().unwrap());
                    break;
                }
                cursor += 2;
            }
            let declared = declared.unwrap_or_else(|| panic!("table {} lacks a count", name));

            let mut contained = 0;
            let mut scan = cursor;
            while !(lines[scan] == "0" && lines[scan + 1] == "ENDTAB") {
                if lines[scan] == "0" && lines[scan + 1] == name {
                    contained += 1;
                }
                scan += 2;
            }
            assert_eq!(declared, contained, "count drift in table {}", name);
            tables_seen += 1;
            index = scan;
        }
        index += 2;
    }
    assert_eq!(tables_seen, 7);
}

#[test]
fn handles_are_unique_uppercase_hex() {
    let text = sample_document(AcadVersion::R2000);
    let lines: Vec<&str> = text.lines().collect();
    let mut handles = Vec::new();
    let mut in_header = false;
    for pair in lines.chunks(2) {
        match pair[0] {
            "2" if pair[1] == "HEADER" => in_header = true,
            "0" if pair[1] == "ENDSEC" => in_header = false,
            // $HANDSEED in the header also rides code 5 but names the
            // next unissued handle, not a record.
            "5" | "105" if !in_header => handles.push(pair[1].to_string()),
            _ => {}
        }
    }
    assert!(!handles.is_empty());
    for handle in &handles {
        assert!(
            handle.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
            "handle {} is not uppercase hex",
            handle
        );
    }
    let mut deduped = handles.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), handles.len(), "duplicate handle issued");
}

#[test]
fn handles_are_entirely_absent_before_r13() {
    for version in [AcadVersion::R10, AcadVersion::R11_12] {
        let text = sample_document(version);
        for pair in text.lines().collect::<Vec<_>>().chunks(2) {
            assert_ne!(pair[0], "5", "code 5 leaked at {}", version);
            assert_ne!(pair[0], "105", "code 105 leaked at {}", version);
        }
        assert!(!text.contains("$HANDSEED"));
        assert!(!text.contains("AcDb"));
    }
}

#[test]
fn reals_use_point_decimal_separator() {
    let text = sample_document(AcadVersion::R2000);
    assert!(!text.contains(','));
    // Spot checks: integral reals keep one decimal, fractions print plainly.
    assert!(text.contains("40\n1.0\n"));
    assert!(text.contains("10\n40.0\n"));
}

#[test]
fn block_begin_and_end_handles_differ_in_document() {
    let text = sample_document(AcadVersion::R2000);
    let begin = text.find("0\nBLOCK\n").unwrap();
    let end = text.find("0\nENDBLK\n").unwrap();
    let handle_after = |offset: usize| {
        let tail = &text[offset..];
        let at = tail.find("\n5\n").unwrap() + 3;
        tail[at..].lines().next().unwrap().to_string()
    };
    assert_ne!(handle_after(begin), handle_after(end));
}

#[test]
fn save_writes_built_text() {
    let dir = std::env::temp_dir().join("dxfcodec-doc-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.dxf");

    let mut alloc = HandleAllocator::default();
    let doc = DxfDocument::standard(AcadVersion::R14, &mut alloc);
    doc.save(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.build());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn registered_classes_land_inside_the_classes_section() {
    let mut alloc = HandleAllocator::default();
    let mut doc = DxfDocument::standard(AcadVersion::R2000, &mut alloc);

    let mut classes = ClassesSection::new();
    classes
        .add_class(&Class::new(
            "ACDBDICTIONARYWDFLT",
            "AcDbDictionaryWithDefault",
            "ObjectDBX Classes",
        ))
        .add_class(&Class::new("WIPEOUT", "AcDbWipeout", "WipeOut").as_entity());
    doc.set_classes(classes.finish());
    let text = doc.build();

    assert_eq!(text.matches("0\nCLASS\n").count(), 2);
    let section = text.find("2\nCLASSES\n").unwrap();
    let endsec = section + text[section..].find("0\nENDSEC\n").unwrap();
    let first = text.find("1\nACDBDICTIONARYWDFLT\n").unwrap();
    let second = text.find("1\nWIPEOUT\n").unwrap();
    assert!(section < first && first < second && second < endsec);
}

#[test]
fn prerendered_entities_splice_in_unchanged() {
    let version = AcadVersion::R2000;
    let mut alloc = HandleAllocator::default();
    let circle =
        Circle::from_center_radius(Vector3::new(3.0, 4.0, 0.0), 2.5, version).with_handle(alloc.next());

    let mut direct = EntitiesSection::new();
    direct.add_entity(&circle);

    let mut spliced = EntitiesSection::new();
    spliced.add_rendered(&circle.render());

    assert_eq!(spliced.finish(), direct.finish());
}

#[test]
fn dictionary_entries_preserve_insertion_order() {
    let mut dict = Dictionary::new(AcadVersion::R2000);
    dict.insert("ACAD_GROUP", Handle::new(0xD0));
    dict.insert("ACAD_LAYOUT", Handle::new(0xD1));
    dict.insert("ACAD_MLINESTYLE", Handle::new(0xD2));
    let text = dict.with_handle(Handle::new(0xC0)).render();
    let group = text.find("3\nACAD_GROUP\n").unwrap();
    let layout = text.find("3\nACAD_LAYOUT\n").unwrap();
    let mline = text.find("3\nACAD_MLINESTYLE\n").unwrap();
    assert!(group < layout && layout < mline);
}
