//! # Postgrid
//!
//! A recent-posts image-grid block: fetch posts from a social feed,
//! degrade gracefully when the feed is unreachable, and emit a uniform
//! grid with cache instructions for the host.
//!
//! ## Architecture
//!
//! Postgrid follows a modular pipeline architecture:
//!
//! ```text
//! Settings → Fetcher (api → scrape → fixture) → Normalizer → RenderResult
//! ```
//!
//! - [`config`]: stored settings and their resolution into a render
//!   configuration
//! - [`fetcher`]: tiered source chain over the feed API, the public
//!   profile page, and a built-in fixture
//! - [`normalizer`]: converts raw posts into uniform display posts and
//!   derives the cache directive
//! - [`block`]: the render entry point tying the stages together
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a commented default settings file
//! postgrid init
//!
//! # Render the grid with the stored settings
//! postgrid render
//!
//! # Same, as JSON
//! postgrid render --json
//! ```
//!
//! ## Degradation model
//!
//! Sources are tried in decreasing order of trust and freshness, each
//! exactly once, until one yields at least one post. Failures never
//! propagate to the rendered output: worst case, the embedded fixture
//! fills the grid. Only a missing access token renders nothing.

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the source
/// chain and the normalizer.
pub mod app;

/// The render entry point: [`block::render`] turns stored settings into
/// a [`RenderResult`](domain::RenderResult).
pub mod block;

/// Command-line interface using clap.
///
/// - `render [--json]` - Fetch and print the grid
/// - `init` - Write a commented default settings file
/// - `config-path` - Print the settings file location
pub mod cli;

/// Block settings, loaded from `~/.config/postgrid/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`RawPost`](domain::RawPost): a post as any source returns it
/// - [`DisplayPost`](domain::DisplayPost): a normalized grid entry
/// - [`CacheDirective`](domain::CacheDirective): cache instructions for
///   the host
pub mod domain;

/// Tiered post fetching.
///
/// - [`Source`](fetcher::Source): async trait over a single source
/// - [`FeedFetcher`](fetcher::FeedFetcher): ordered fallback chain
pub mod fetcher;

/// Post normalization and cache-directive derivation.
pub mod normalizer;
