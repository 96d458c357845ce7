// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{Child, Document, Node, Query};
pub use net::{Fetch, HttpFetcher};
