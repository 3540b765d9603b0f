//! Minimal content-client example against a self-hosted fixture API.
//!
//! Run with: cargo run --example fetch_content

use foliokit::{ClientConfig, ContentClient, PhotoSection};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Foliokit - content client example\n");

    // Use a tiny HTTP server to provide deterministic content for the example
    let server = tiny_http::Server::http("0.0.0.0:0").unwrap();
    let addr = server.server_addr();

    std::thread::spawn(move || {
        for req in server.incoming_requests() {
            let body = match req.url() {
                "/awards" => {
                    r#"[{"_id":"a1","title":"Campus Film Prize","description":"First place, documentary short","imageUrl":"http://localhost/img/prize.jpg","articleUrl":"http://localhost/news/prize","order":1}]"#
                }
                "/photography/behind-scenes" => {
                    r#"[{"_id":"p1","section":"behind-scenes","imageUrl":"http://localhost/img/bts.jpg","caption":"Lighting check","order":1}]"#
                }
                _ => "[]",
            };
            let _ = req.respond(tiny_http::Response::from_string(body));
        }
    });

    let client = ContentClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
        ..Default::default()
    })?;

    let awards = client.awards().await?;
    println!("awards: {} item(s), first: {}", awards.len(), awards[0].title);

    let photos = client.photos(PhotoSection::BehindScenes).await?;
    println!(
        "behind-scenes: {} photo(s), first caption: {}",
        photos.len(),
        photos[0].caption
    );

    println!("Done.");
    Ok(())
}
