//! foliokit CLI - fetch portfolio content and rasterize PDF documents

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use foliokit::{
    ClientConfig, Collection, ContentClient, PdfSource, PhotoSection, Rasterizer, RenderOptions,
};

#[derive(Parser)]
#[command(name = "foliokit")]
#[command(version)]
#[command(about = "Fetch portfolio content and rasterize PDF documents", long_about = None)]
struct Cli {
    /// Content API base URL
    #[arg(long, env = "FOLIO_API_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one content collection and print it as JSON
    Fetch {
        /// Collection to fetch
        #[arg(value_enum)]
        collection: CollectionArg,
    },

    /// Render a PDF to PNG page images, one file per page
    Render {
        /// Document source: an http(s) URL or a local file path
        source: String,

        /// Scale factor applied to the intrinsic page size
        #[arg(long, default_value_t = 1.0)]
        scale: f32,

        /// Directory the page images are written to
        #[arg(short, long, value_name = "DIR", default_value = "pages")]
        out: PathBuf,

        /// Print data URLs to stdout instead of writing files
        #[arg(long)]
        data_urls: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CollectionArg {
    BehindScenes,
    CampusEvents,
    PortraitLandscape,
    Awards,
    LatestVideos,
    FeaturedWork,
    HomeIntro,
}

impl From<CollectionArg> for Collection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::BehindScenes => Collection::BehindScenes,
            CollectionArg::CampusEvents => Collection::CampusEvents,
            CollectionArg::PortraitLandscape => Collection::PortraitLandscape,
            CollectionArg::Awards => Collection::Awards,
            CollectionArg::LatestVideos => Collection::LatestVideos,
            CollectionArg::FeaturedWork => Collection::FeaturedWork,
            CollectionArg::HomeIntro => Collection::HomeIntro,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { collection } => {
            let mut config = ClientConfig::default();
            if let Some(base_url) = cli.base_url {
                config.base_url = base_url;
            }
            let client = ContentClient::new(config).context("failed to build content client")?;
            let json = fetch_as_json(&client, collection.into()).await?;
            println!("{}", json);
        }

        Commands::Render {
            source,
            scale,
            out,
            data_urls,
        } => {
            let source = if source.starts_with("http://") || source.starts_with("https://") {
                PdfSource::Url(source)
            } else {
                PdfSource::File(PathBuf::from(source))
            };

            let rasterizer = Rasterizer::new();
            let mut pages = rasterizer
                .convert(source, RenderOptions { scale })
                .await
                .context("failed to open document")?;

            log::info!("document has {} pages", pages.page_count());
            if !data_urls {
                std::fs::create_dir_all(&out)
                    .with_context(|| format!("failed to create {}", out.display()))?;
            }

            while let Some(page) = pages.next_page().await {
                let page = page?;
                if data_urls {
                    println!("{}", page.data_url());
                } else {
                    let path = out.join(format!("page-{}.png", page.number));
                    std::fs::write(&path, &page.png_data)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    log::info!("wrote {} ({}x{})", path.display(), page.width, page.height);
                }
            }
        }
    }

    Ok(())
}

async fn fetch_as_json(client: &ContentClient, collection: Collection) -> anyhow::Result<String> {
    let json = match collection {
        Collection::BehindScenes => {
            serde_json::to_string_pretty(&client.photos(PhotoSection::BehindScenes).await?)?
        }
        Collection::CampusEvents => {
            serde_json::to_string_pretty(&client.photos(PhotoSection::CampusEvents).await?)?
        }
        Collection::PortraitLandscape => {
            serde_json::to_string_pretty(&client.photos(PhotoSection::PortraitLandscape).await?)?
        }
        Collection::Awards => serde_json::to_string_pretty(&client.awards().await?)?,
        Collection::LatestVideos => serde_json::to_string_pretty(&client.latest_videos().await?)?,
        Collection::FeaturedWork => serde_json::to_string_pretty(&client.featured_work().await?)?,
        Collection::HomeIntro => serde_json::to_string_pretty(&client.home_intro().await?)?,
    };
    Ok(json)
}
