//! Integration tests for the content client, against a local fixture server.

use foliokit::{ClientConfig, ContentClient, Error, PhotoSection};
use tiny_http::{Header, Response, Server};

/// Start a fixture content API on an ephemeral port and return its base URL.
fn start_content_server() -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let body = match request.url() {
                "/photography/behind-scenes" => Some(
                    r#"[
                        {"_id":"p1","section":"behind-scenes","imageUrl":"http://cdn.test/bts/1.jpg","caption":"Rigging the slider","order":2},
                        {"_id":"p2","section":"behind-scenes","imageUrl":"http://cdn.test/bts/2.jpg","caption":"Color checks","order":1},
                        {"_id":"p3","section":"behind-scenes","imageUrl":"http://cdn.test/bts/3.jpg","caption":"Wrap shot","order":3}
                    ]"#,
                ),
                "/photography/campus-events" => Some("[]"),
                "/photography/portrait-landscape" => Some(
                    r#"[
                        {"_id":"p4","section":"portrait-landscape","imageUrl":"http://cdn.test/pl/1.jpg","caption":"Golden hour","order":1}
                    ]"#,
                ),
                "/awards" => Some(
                    r#"[
                        {"_id":"a1","title":"Campus Film Prize","description":"First place, documentary short","imageUrl":"http://cdn.test/awards/1.jpg","articleUrl":"http://news.test/prize","order":1},
                        {"_id":"a2","title":"Photo of the Year","description":"Runner-up","imageUrl":"http://cdn.test/awards/2.jpg","articleUrl":"http://news.test/photo","order":2}
                    ]"#,
                ),
                "/latest-videos" => Some(
                    r#"[
                        {"_id":"v1","title":"Spring aftermovie","videoId":"dQw4w9WgXcQ","description":"Event recap","order":1}
                    ]"#,
                ),
                "/featured-work" => Some(
                    r#"[
                        {"_id":"f1","title":"Brand spot","description":"30s commercial","imageUrl":"http://cdn.test/work/1.jpg","projectUrl":"http://work.test/spot","order":1}
                    ]"#,
                ),
                "/home-intro" => Some(
                    r#"[
                        {"_id":"h1","description":"Videographer and photographer based nowhere in particular."}
                    ]"#,
                ),
                _ => None,
            };

            let response = match body {
                Some(body) => Response::from_string(body).with_header(
                    "Content-Type: application/json".parse::<Header>().unwrap(),
                ),
                None => Response::from_string("Not Found").with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });

    format!("http://{}", addr)
}

/// Start a server that answers every request with the given status.
fn start_failing_server(status: u16, body: &'static str) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let _ = request.respond(Response::from_string(body).with_status_code(status));
        }
    });

    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> ContentClient {
    ContentClient::new(ClientConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    })
    .expect("failed to build content client")
}

#[tokio::test]
async fn photos_preserve_server_order() {
    let client = client_for(&start_content_server());

    let photos = client.photos(PhotoSection::BehindScenes).await.unwrap();

    // The server intentionally interleaves `order` values; the client must
    // not re-sort.
    let captions: Vec<&str> = photos.iter().map(|p| p.caption.as_str()).collect();
    assert_eq!(
        captions,
        vec!["Rigging the slider", "Color checks", "Wrap shot"]
    );
    let orders: Vec<i64> = photos.iter().map(|p| p.order).collect();
    assert_eq!(orders, vec![2, 1, 3]);
    assert!(photos
        .iter()
        .all(|p| p.section == PhotoSection::BehindScenes));
}

#[tokio::test]
async fn empty_collection_parses_as_empty_vec() {
    let client = client_for(&start_content_server());
    let photos = client.photos(PhotoSection::CampusEvents).await.unwrap();
    assert!(photos.is_empty());
}

#[tokio::test]
async fn portrait_landscape_roundtrip() {
    let client = client_for(&start_content_server());
    let photos = client.photos(PhotoSection::PortraitLandscape).await.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].section, PhotoSection::PortraitLandscape);
}

#[tokio::test]
async fn awards_roundtrip() {
    let client = client_for(&start_content_server());
    let awards = client.awards().await.unwrap();
    assert_eq!(awards.len(), 2);
    assert_eq!(awards[0].title, "Campus Film Prize");
    assert_eq!(awards[1].article_url, "http://news.test/photo");
}

#[tokio::test]
async fn latest_videos_roundtrip() {
    let client = client_for(&start_content_server());
    let videos = client.latest_videos().await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].video_id, "dQw4w9WgXcQ");
}

#[tokio::test]
async fn featured_work_roundtrip() {
    let client = client_for(&start_content_server());
    let work = client.featured_work().await.unwrap();
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].project_url, "http://work.test/spot");
}

#[tokio::test]
async fn home_intro_roundtrip() {
    let client = client_for(&start_content_server());
    let intro = client.home_intro().await.unwrap();
    assert_eq!(intro.len(), 1);
    assert!(intro[0].description.contains("Videographer"));
}

#[tokio::test]
async fn not_found_is_request_failed() {
    let client = client_for(&start_failing_server(404, "Not Found"));
    let err = client.awards().await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed { status: 404 }));
}

#[tokio::test]
async fn server_error_is_request_failed() {
    let client = client_for(&start_failing_server(500, "boom"));
    let err = client.latest_videos().await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed { status: 500 }));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let client = client_for("http://127.0.0.1:1");
    let err = client.awards().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let client = client_for(&start_failing_server(200, "<html>definitely not json</html>"));
    let err = client.featured_work().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn concurrent_fetches_are_independent() {
    let client = client_for(&start_content_server());

    let (awards, videos, intro) = tokio::join!(
        client.awards(),
        client.latest_videos(),
        client.home_intro()
    );

    assert_eq!(awards.unwrap().len(), 2);
    assert_eq!(videos.unwrap().len(), 1);
    assert_eq!(intro.unwrap().len(), 1);
}
