//! # folio
//!
//! A terminal viewer for a personal portfolio aggregated from GitHub, Medium
//! and YouTube by a separate backend.
//!
//! ## Architecture
//!
//! ```text
//! Route → View (mount, fetch once) → api::PortfolioApi → GET {base}/api/...
//!                ▲                                              │
//!                └──── FetchMsg (mount id + ticket) ◄───────────┘
//! ```
//!
//! Results are tagged with the view instance and request that asked for them,
//! so answers that arrive after navigating away, or after a newer request,
//! are dropped instead of overwriting current state.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI against a deployed API
//! PORTFOLIO_API_URL=https://example.execute-api.us-east-1.amazonaws.com folio
//!
//! # Start directly on the videos tab
//! folio tui --route /youtube
//!
//! # Print collections without the TUI
//! folio repos
//! folio repo my-repo-id
//! ```

/// Application context and error handling.
pub mod app;

/// HTTP client for the aggregation API.
///
/// - [`PortfolioApi`](api::PortfolioApi): async trait with one method per resource
/// - [`HttpApiClient`](api::http_client::HttpApiClient): reqwest implementation
pub mod api;

/// Command-line interface using clap.
pub mod cli;

/// Configuration from `~/.config/folio/config.toml`: API URL, colors, keybindings.
pub mod config;

/// Repository, article and video records as served by the API.
pub mod domain;

/// The four routes: `/`, `/github`, `/medium`, `/youtube`.
pub mod route;

/// Terminal user interface built with ratatui.
///
/// A header with one tab per route, the routed view, and a footer.
/// Keybindings: 1-4 or Tab switch routes, hjkl move, Enter opens,
/// Esc goes back, o opens in the browser, q quits.
pub mod tui;

/// Per-route view models with their loading state.
pub mod view;
