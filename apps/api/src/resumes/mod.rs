//! Resume storage — CRUD over the structured data document a render
//! request is assembled from.

pub mod handlers;
