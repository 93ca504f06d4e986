//! # Goodshelf Architecture
//!
//! Goodshelf is a **UI-agnostic catalog library**: it joins three independent
//! record sets (users, categories, products) into one enriched product view
//! and recomputes the visible subset whenever a filter changes. Markup,
//! styling and event wiring live in whatever UI embeds it; the library only
//! ever receives filter inputs and hands back records to render read-only.
//!
//! ## Data flow
//!
//! ```text
//! RecordSource (store/)          read once at startup
//!        │
//!        ▼
//! Join Resolver (join.rs)        categories gain owners,
//!        │                       products gain categories
//!        ▼
//! Filter Engine (filter.rs)      re-run on every FilterState change
//!        │
//!        ▼
//! visible product list           consumed by presentation
//! ```
//!
//! ## Key principles
//!
//! - **Enrichment is pure and runs once.** The base sets are immutable for
//!   the session, so [`Catalog`](api::Catalog) enriches at construction and
//!   never again.
//! - **Unresolved references are data gaps, not errors.** A dangling owner or
//!   category id enriches to `None` and flows through to presentation as
//!   "missing data". Nothing in the join or filter path can fail.
//! - **Filter state is replaced, never patched.** Each change operation
//!   produces a whole new [`FilterState`](filter::FilterState) and the
//!   visible list is re-derived synchronously, so state and output can never
//!   drift apart.
//!
//! ## Module overview
//!
//! - [`api`]: the `Catalog` facade — entry point for all operations
//! - [`join`]: enrichment of categories and products by id lookup
//! - [`filter`]: filter state and the visibility computation
//! - [`store`]: record loading abstraction and its backends
//! - [`model`]: base and enriched record types
//! - [`error`]: error types (only record loading can fail)

pub mod api;
pub mod error;
pub mod filter;
pub mod join;
pub mod model;
pub mod store;
