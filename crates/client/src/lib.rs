//! Upstream client for aggra.
//!
//! This crate provides the typed client for the placeholder REST API the
//! façade aggregates, plus the `UpstreamApi` trait the service layer is
//! written against.

pub mod placeholder;

pub use placeholder::{
    Address, Company, Geo, NewTodo, Photo, PlaceholderClient, PlaceholderConfig, Post, Resource, Todo, UpstreamApi,
    UpstreamError, User,
};
