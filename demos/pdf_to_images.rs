//! Render a PDF file to PNG images, page by page.
//!
//! Run with: cargo run --example pdf_to_images -- path/to/document.pdf

use foliokit::{PdfSource, Rasterizer, RenderOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: pdf_to_images <file.pdf>")?;

    let rasterizer = Rasterizer::new();
    let mut pages = rasterizer
        .convert(PdfSource::File(path.into()), RenderOptions { scale: 1.5 })
        .await?;

    let total = pages.page_count();
    println!("Rendering {} page(s)...", total);

    while let Some(page) = pages.next_page().await {
        let page = page?;
        let name = format!("page-{}.png", page.number);
        std::fs::write(&name, &page.png_data)?;
        println!(
            "  {} ({}/{}, {}x{})",
            name, page.number, total, page.width, page.height
        );
    }

    println!("Done.");
    Ok(())
}
