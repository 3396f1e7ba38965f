//! PDF Renderer — the single point of entry for all PDF generation.
//!
//! The backend is pluggable: `AppState` holds an `Arc<dyn PdfRenderer>`,
//! swapped for a stub in tests. The production implementation drives a
//! headless Chromium print pipeline, which is the only backend that honors
//! the composer's forced page breaks and background rendering exactly.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use headless_chrome::browser::default_executable;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use tracing::debug;

use crate::errors::AppError;

// A4 paper, in inches (210 x 297 mm).
const PAPER_WIDTH_IN: f64 = 8.27;
const PAPER_HEIGHT_IN: f64 = 11.69;
// Margins: 15 mm top/right, 20 mm bottom/left.
const MARGIN_TOP_IN: f64 = 0.59;
const MARGIN_RIGHT_IN: f64 = 0.59;
const MARGIN_BOTTOM_IN: f64 = 0.79;
const MARGIN_LEFT_IN: f64 = 0.79;

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Converts final markup into PDF bytes. Callers bound the call with a
    /// timeout; implementations do not retry.
    async fn render(&self, html: String) -> Result<Vec<u8>, AppError>;
}

/// Headless-Chromium print backend. Each render launches a fresh browser,
/// navigates to the markup as a data URL, and prints.
pub struct ChromiumRenderer {
    chrome_binary: Option<PathBuf>,
}

impl ChromiumRenderer {
    pub fn new(chrome_binary: Option<PathBuf>) -> Self {
        Self { chrome_binary }
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render(&self, html: String) -> Result<Vec<u8>, AppError> {
        let binary = self.chrome_binary.clone();
        // The whole Chromium round-trip is blocking.
        tokio::task::spawn_blocking(move || print_with_chromium(&html, binary.as_deref()))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("render task panicked: {e}")))?
    }
}

fn print_with_chromium(html: &str, binary: Option<&Path>) -> Result<Vec<u8>, AppError> {
    let path = match binary {
        Some(p) => Some(p.to_path_buf()),
        None => default_executable().ok(),
    };

    let launch_options = LaunchOptions {
        headless: true,
        sandbox: false,
        path,
        ..Default::default()
    };

    let browser = Browser::new(launch_options)
        .map_err(|e| AppError::Render(format!("Failed to launch Chromium: {e}")))?;
    let tab = browser
        .new_tab()
        .map_err(|e| AppError::Render(format!("Failed to open tab: {e}")))?;

    let data_url = format!("data:text/html;base64,{}", STANDARD.encode(html));
    tab.navigate_to(&data_url)
        .map_err(|e| AppError::Render(format!("Failed to load markup: {e}")))?;
    tab.wait_until_navigated()
        .map_err(|e| AppError::Render(format!("Markup never finished loading: {e}")))?;

    let pdf = tab
        .print_to_pdf(Some(print_options()))
        .map_err(|e| AppError::Render(format!("print_to_pdf failed: {e}")))?;

    debug!("Rendered PDF: {} bytes", pdf.len());
    Ok(pdf)
}

fn print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(PAPER_WIDTH_IN),
        paper_height: Some(PAPER_HEIGHT_IN),
        margin_top: Some(MARGIN_TOP_IN),
        margin_right: Some(MARGIN_RIGHT_IN),
        margin_bottom: Some(MARGIN_BOTTOM_IN),
        margin_left: Some(MARGIN_LEFT_IN),
        // The composer marks page breaks in CSS; honor them exactly.
        prefer_css_page_size: Some(true),
        ..Default::default()
    }
}
