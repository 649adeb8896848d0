//! Item sources feeding URLs to the verifier.
//!
//! A source turns a document into an ordered list of
//! [`ItemRecord`](crate::models::ItemRecord)s. Sources distinguish a missing
//! file from an empty document: the first is an error, the second a
//! legitimate zero-length run.
//!
//! | Source | Module | Format |
//! |--------|--------|--------|
//! | News sitemap | [`sitemap`] | `<urlset>` with optional `news:` extension |

pub mod sitemap;
