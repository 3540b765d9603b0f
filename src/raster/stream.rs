//! Conversion worker and the incremental page stream.
//!
//! Each conversion spawns one dedicated worker thread that owns the document
//! handle (and, for local-file sources, the staged temp copy) and renders
//! pages strictly in ascending order. Pages cross back to async callers over
//! a bounded channel, so the caller observes the sequence growing one page at
//! a time and the worker can never run far ahead of the consumer.

use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use tempfile::NamedTempFile;
use tokio::sync::{mpsc, oneshot};

use super::engine::Document;
use super::{RenderOptions, RenderedPage};
use crate::{Error, Result};

/// How far the worker may run ahead of the consumer: one page buffered in the
/// channel plus one in flight.
const EMIT_CAPACITY: usize = 1;

pub(crate) enum WorkerInput {
    /// Document bytes already in memory (remote sources).
    Bytes(Vec<u8>),
    /// A staged temp copy of a local file, owned by the worker until the
    /// conversion exits.
    Staged(NamedTempFile),
}

enum PageUpdate {
    Page(RenderedPage),
    Failed(Error),
    Done,
}

#[derive(Debug, PartialEq, Eq)]
enum LoopOutcome {
    Completed,
    Cancelled,
    Failed,
}

/// Copy a local source file into a named temp file.
///
/// The copy is the worker's stable snapshot of the source; dropping it
/// removes the file, which is what guarantees release on every exit path.
pub(crate) fn stage_file(path: &Path) -> Result<NamedTempFile> {
    let mut source = std::fs::File::open(path).map_err(|e| {
        Error::InvalidDocument(format!("unreadable source {}: {}", path.display(), e))
    })?;

    let mut staged = NamedTempFile::new()?;
    std::io::copy(&mut source, staged.as_file_mut()).map_err(|e| {
        Error::InvalidDocument(format!("failed to stage {}: {}", path.display(), e))
    })?;

    Ok(staged)
}

/// Spawn the worker thread and wait for the document to open.
///
/// The oneshot resolves with the page count once the document handle exists,
/// or with the opening failure. Pages then arrive over the bounded channel.
pub(crate) async fn spawn_conversion(
    input: WorkerInput,
    options: RenderOptions,
    staged_path: Option<PathBuf>,
) -> Result<PageStream> {
    let cancel = Arc::new(AtomicBool::new(false));
    let (page_tx, page_rx) = mpsc::channel(EMIT_CAPACITY);
    let (init_tx, init_rx) = oneshot::channel();

    let worker_cancel = cancel.clone();
    std::thread::spawn(move || convert_worker(input, options, init_tx, page_tx, worker_cancel));

    let page_count = init_rx.await.map_err(|e| {
        Error::Other(format!(
            "conversion worker exited before opening the document: {}",
            e
        ))
    })??;

    Ok(PageStream {
        page_count,
        rx: page_rx,
        cancel,
        staged_path,
        finished: false,
    })
}

fn convert_worker(
    input: WorkerInput,
    options: RenderOptions,
    init_tx: oneshot::Sender<Result<u32>>,
    tx: mpsc::Sender<PageUpdate>,
    cancel: Arc<AtomicBool>,
) {
    let mut staged = None;
    let bytes = match input {
        WorkerInput::Bytes(bytes) => bytes,
        WorkerInput::Staged(tmp) => match std::fs::read(tmp.path()) {
            Ok(bytes) => {
                staged = Some(tmp);
                bytes
            }
            Err(e) => {
                let _ = init_tx.send(Err(Error::InvalidDocument(format!(
                    "unreadable staged copy: {}",
                    e
                ))));
                return;
            }
        },
    };

    let doc = match Document::load(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            let _ = init_tx.send(Err(e));
            return;
        }
    };

    let total = doc.page_count();
    if init_tx.send(Ok(total)).is_err() {
        // Caller gave up while the document was opening.
        return;
    }

    let scale = options.scale;
    let outcome = run_render_loop(
        total,
        &mut |number| {
            let png_data = doc.render_page(number, scale)?;
            let dims = imagesize::blob_size(&png_data).map_err(|e| Error::PageRenderFailed {
                page: number,
                reason: format!("unreadable PNG output: {}", e),
            })?;
            Ok(RenderedPage {
                number,
                width: dims.width as u32,
                height: dims.height as u32,
                png_data,
            })
        },
        &tx,
        &cancel,
    );

    // Release the staged copy before reporting the terminal state.
    drop(staged);

    if outcome == LoopOutcome::Completed {
        let _ = tx.blocking_send(PageUpdate::Done);
    }
}

/// Render pages `1..=total` in order, emitting each one as it completes.
///
/// The cancellation flag is checked between pages only; an in-flight page
/// always completes. A render failure emits `PageRenderFailed` after the
/// pages already produced, and nothing past the failing page is attempted.
fn run_render_loop(
    total: u32,
    render_one: &mut dyn FnMut(u32) -> Result<RenderedPage>,
    tx: &mpsc::Sender<PageUpdate>,
    cancel: &AtomicBool,
) -> LoopOutcome {
    for number in 1..=total {
        if cancel.load(Ordering::Relaxed) {
            log::debug!("conversion cancelled before page {}/{}", number, total);
            return LoopOutcome::Cancelled;
        }

        match render_one(number) {
            Ok(page) => {
                if tx.blocking_send(PageUpdate::Page(page)).is_err() {
                    // Receiver dropped; same as cancellation.
                    return LoopOutcome::Cancelled;
                }
            }
            Err(e) => {
                log::warn!("page {}/{} failed: {}", number, total, e);
                let _ = tx.blocking_send(PageUpdate::Failed(e));
                return LoopOutcome::Failed;
            }
        }
    }

    LoopOutcome::Completed
}

/// The lazily produced, ordered sequence of rendered pages.
///
/// The total page count is known from the moment the stream exists. Pages
/// arrive in strictly ascending, contiguous order starting at 1; once the
/// stream yields `None` (or an error) it is exhausted, and a fresh conversion
/// is the only way to start over.
///
/// Dropping the stream cancels the conversion, so a caller that navigates
/// away simply stops polling.
pub struct PageStream {
    page_count: u32,
    rx: mpsc::Receiver<PageUpdate>,
    cancel: Arc<AtomicBool>,
    staged_path: Option<PathBuf>,
    finished: bool,
}

impl PageStream {
    /// Total number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Request cooperative cancellation.
    ///
    /// The flag is observed between pages: a page already rendering
    /// completes and may still be yielded, then the sequence ends without an
    /// error. Pages already observed stay valid.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Wait for the next page.
    ///
    /// `Some(Ok(page))` for each rendered page, `Some(Err(_))` exactly once
    /// if a page fails, `None` once the document is done or the conversion
    /// was cancelled.
    pub async fn next_page(&mut self) -> Option<Result<RenderedPage>> {
        if self.finished {
            return None;
        }
        let update = self.rx.recv().await;
        self.absorb(update)
    }

    /// Path of the staged temp copy backing a local-file conversion.
    ///
    /// Test hook: lets callers observe that the scoped staging resource is
    /// released once the conversion exits.
    #[doc(hidden)]
    pub fn staged_path(&self) -> Option<&Path> {
        self.staged_path.as_deref()
    }

    fn absorb(&mut self, update: Option<PageUpdate>) -> Option<Result<RenderedPage>> {
        match update {
            Some(PageUpdate::Page(page)) => Some(Ok(page)),
            Some(PageUpdate::Failed(e)) => {
                self.finished = true;
                Some(Err(e))
            }
            Some(PageUpdate::Done) | None => {
                self.finished = true;
                None
            }
        }
    }
}

impl futures::Stream for PageStream {
    type Item = Result<RenderedPage>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }
        match this.rx.poll_recv(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(update) => Poll::Ready(this.absorb(update)),
        }
    }
}

impl Drop for PageStream {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}
