use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Write;

use foliokit::{PdfSource, Rasterizer, RenderOptions};

#[path = "../tests/common/mod.rs"]
mod common;

fn write_fixture(sizes: &[(u32, u32)]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&common::pdf_with_pages(sizes)).unwrap();
    file
}

fn convert_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let rasterizer = Rasterizer::new();

    let single = write_fixture(&[(612, 792)]);
    let eight = write_fixture(&[(612, 792); 8]);

    c.bench_function("convert_single_page", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut pages = rasterizer
                    .convert(
                        PdfSource::File(single.path().to_path_buf()),
                        RenderOptions::default(),
                    )
                    .await
                    .unwrap();
                while let Some(page) = pages.next_page().await {
                    page.unwrap();
                }
            })
        })
    });

    c.bench_function("convert_eight_pages", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut pages = rasterizer
                    .convert(
                        PdfSource::File(eight.path().to_path_buf()),
                        RenderOptions::default(),
                    )
                    .await
                    .unwrap();
                while let Some(page) = pages.next_page().await {
                    page.unwrap();
                }
            })
        })
    });
}

criterion_group!(benches, convert_benchmark);
criterion_main!(benches);
