//! Page-data bridge
//!
//! Models the request/response boundary between the popup client and the
//! page-capture side. The requester sends one `GET_PAGE_DATA` message and
//! waits for the snapshot; the capture side answers with the current page or
//! not at all. A missing answer is a hard, terminal failure surfaced to the
//! user - it is never retried.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::model::PageSnapshot;

/// Default wait for the capture side before giving up
pub const DEFAULT_BRIDGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Messages the requester sends across the bridge
#[derive(Debug)]
pub enum PageDataRequest {
    /// Ask for the current page. The capture side answers on `reply` or
    /// drops it to signal that the page cannot be read.
    GetPageData { reply: oneshot::Sender<PageSnapshot> },
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The capture side is gone or declined to answer
    #[error("page data unavailable")]
    Unavailable,

    /// The capture side did not answer in time; treated the same as an
    /// unreadable page
    #[error("page data request timed out after {0:?}")]
    Timeout(Duration),
}

/// Requester half of the bridge.
///
/// The channel holds a single request, so at most one request is outstanding
/// at any time; there is no ordering or multiplexing beyond that.
pub struct PageDataBridge {
    tx: mpsc::Sender<PageDataRequest>,
    timeout: Duration,
}

impl PageDataBridge {
    /// Request the current page from the capture side.
    pub async fn request_page_data(&self) -> Result<PageSnapshot, BridgeError> {
        let (reply, rx) = oneshot::channel();

        self.tx
            .send(PageDataRequest::GetPageData { reply })
            .await
            .map_err(|_| BridgeError::Unavailable)?;

        match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(snapshot)) => Ok(snapshot),
            Ok(Err(_)) => Err(BridgeError::Unavailable),
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "Page data request timed out");
                Err(BridgeError::Timeout(self.timeout))
            }
        }
    }
}

/// Create a connected bridge: the requester half and the receiver the
/// capture side drains.
pub fn channel(timeout: Duration) -> (PageDataBridge, mpsc::Receiver<PageDataRequest>) {
    let (tx, rx) = mpsc::channel(1);
    (PageDataBridge { tx, timeout }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::page::PAGE_TEXT_MAX_CHARS;

    /// Capture side that answers every request with the given page.
    fn spawn_capture_side(
        mut rx: mpsc::Receiver<PageDataRequest>,
        url: &'static str,
        title: &'static str,
        text: String,
    ) {
        tokio::spawn(async move {
            while let Some(PageDataRequest::GetPageData { reply }) = rx.recv().await {
                let _ = reply.send(PageSnapshot::new(url, title, text.clone()));
            }
        });
    }

    #[tokio::test]
    async fn test_round_trip_returns_snapshot() {
        let (bridge, rx) = channel(DEFAULT_BRIDGE_TIMEOUT);
        spawn_capture_side(rx, "https://news.example/a", "A story", "body text".to_string());

        let snapshot = bridge.request_page_data().await.unwrap();
        assert_eq!(snapshot.url, "https://news.example/a");
        assert_eq!(snapshot.title, "A story");
        assert_eq!(snapshot.text, "body text");
    }

    #[tokio::test]
    async fn test_long_page_text_is_truncated() {
        let (bridge, rx) = channel(DEFAULT_BRIDGE_TIMEOUT);
        let long = "z".repeat(PAGE_TEXT_MAX_CHARS + 500);
        spawn_capture_side(rx, "https://news.example/b", "B", long);

        let snapshot = bridge.request_page_data().await.unwrap();
        assert_eq!(snapshot.text.chars().count(), PAGE_TEXT_MAX_CHARS);
    }

    #[tokio::test]
    async fn test_dropped_reply_is_unavailable() {
        let (bridge, mut rx) = channel(DEFAULT_BRIDGE_TIMEOUT);
        tokio::spawn(async move {
            while let Some(PageDataRequest::GetPageData { reply }) = rx.recv().await {
                drop(reply);
            }
        });

        let result = bridge.request_page_data().await;
        assert!(matches!(result, Err(BridgeError::Unavailable)));
    }

    #[tokio::test]
    async fn test_closed_channel_is_unavailable() {
        let (bridge, rx) = channel(DEFAULT_BRIDGE_TIMEOUT);
        drop(rx);

        let result = bridge.request_page_data().await;
        assert!(matches!(result, Err(BridgeError::Unavailable)));
    }

    #[tokio::test]
    async fn test_silent_capture_side_times_out() {
        let (bridge, mut rx) = channel(Duration::from_millis(50));
        tokio::spawn(async move {
            // Hold replies open without answering
            let mut held = Vec::new();
            while let Some(PageDataRequest::GetPageData { reply }) = rx.recv().await {
                held.push(reply);
            }
        });

        let result = bridge.request_page_data().await;
        assert!(matches!(result, Err(BridgeError::Timeout(_))));
    }
}
