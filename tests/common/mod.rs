//! Shared test fixtures.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a valid in-memory PDF with one page per `(width, height)` entry.
///
/// Each page gets the given MediaBox (in PDF points) and a small filled
/// rectangle so the renderer has actual content to interpret.
pub fn pdf_with_pages(sizes: &[(u32, u32)]) -> Vec<u8> {
    assert!(!sizes.is_empty(), "fixture needs at least one page");

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = sizes
        .iter()
        .map(|&(width, height)| {
            let content = Content {
                operations: vec![
                    Operation::new(
                        "re",
                        vec![10.into(), 10.into(), 30.into(), 20.into()],
                    ),
                    Operation::new("f", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    (width as i64).into(),
                    (height as i64).into(),
                ],
                "Contents" => content_id,
            });
            page_id.into()
        })
        .collect();

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
