use crate::common::draft;
use std::collections::HashSet;
use tailorkit_core::Unit;
use tailorkit_drafting::{
    estimate_for, export_document, ConstantTable, Diagram, ExportFormat, GarmentStyle,
    RenderOptions,
};

fn diagram(style: GarmentStyle) -> Diagram {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, style);
    let fabric = estimate_for(&set, &ConstantTable::default());
    Diagram::from_pattern_set(&set, "Pattern for Jane Doe")
        .with_note(format!("Fabric needed: {}", fabric))
}

#[test]
fn test_svg_export() {
    let doc = export_document(
        &diagram(GarmentStyle::PantsWithExtras),
        "Jane Doe",
        ExportFormat::Svg,
        &RenderOptions::default(),
    )
    .unwrap();

    assert!(doc.file_name.starts_with("Jane_Doe_pattern_"));
    assert!(doc.file_name.ends_with(".svg"));
    assert_eq!(doc.mime_type(), "image/svg+xml");

    let text = String::from_utf8(doc.bytes).unwrap();
    assert!(text.contains("Fabric needed: 2.30 Meters"));
    assert!(text.contains(">POCKET</tspan>"));
}

#[test]
fn test_png_export() {
    let options = RenderOptions {
        width: 400,
        height: 300,
        ..Default::default()
    };
    let doc = export_document(&diagram(GarmentStyle::Pants), "", ExportFormat::Png, &options)
        .unwrap();
    assert!(doc.file_name.starts_with("client_pattern_"));
    assert!(doc.file_name.ends_with(".png"));
    assert_eq!(&doc.bytes[..4], b"\x89PNG");

    let decoded = image::load_from_memory(&doc.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (400, 300));
}

#[test]
fn test_file_names_unique_per_call() {
    let d = diagram(GarmentStyle::SkirtLike);
    let options = RenderOptions {
        include_timestamp: false,
        ..Default::default()
    };
    let names: HashSet<String> = (0..8)
        .map(|_| {
            export_document(&d, "Jane Doe", ExportFormat::Svg, &options)
                .unwrap()
                .file_name
        })
        .collect();
    assert_eq!(names.len(), 8);
}

#[test]
fn test_save_never_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let doc = export_document(
        &diagram(GarmentStyle::Pants),
        "Sam",
        ExportFormat::Svg,
        &RenderOptions::default(),
    )
    .unwrap();

    let path = doc.save_in(dir.path()).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), doc.bytes);
    assert!(doc.save_in(dir.path()).is_err());
}
