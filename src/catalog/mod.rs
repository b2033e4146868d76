//! Catalog module
//!
//! [`CatalogClient`] exposes the catalog's operations. Paginated listings go
//! through [`ListingEndpoint`], the HTTP-backed page source.

mod client;
mod endpoint;

pub use client::CatalogClient;
pub use endpoint::ListingEndpoint;

#[cfg(test)]
mod tests;
