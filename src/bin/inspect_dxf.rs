//! Diagnostic: scan a DXF file and print the annotated tag listing.

use anyhow::{bail, Context, Result};
use dxfcodec::inspect::{render_listing, ScanItem, TagStreamScanner};
use std::fs;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("usage: inspect_dxf <file.dxf> [...]");
    }

    for path in &args {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path))?;
        let items = TagStreamScanner::scan_bytes(&bytes);

        let sections = items
            .iter()
            .filter(|i| matches!(i, ScanItem::SectionStart { .. }))
            .count();
        let pairs = items
            .iter()
            .filter(|i| matches!(i, ScanItem::Pair { .. }))
            .count();

        println!("═══ {} ═══", path);
        println!("{} sections, {} pairs", sections, pairs);
        print!("{}", render_listing(&items));
    }

    Ok(())
}
