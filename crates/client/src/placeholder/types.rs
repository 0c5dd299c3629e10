//! Upstream resource types.
//!
//! Field layout follows the placeholder API's JSON (camelCase on the wire).
//! Records are passed through verbatim; nothing here is invented locally
//! except the distinction between a todo being created (`NewTodo`, id not yet
//! assigned) and a todo as the upstream returns it (`Todo`).

use serde::{Deserialize, Serialize};

/// A user record from `/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Postal address of a user; `city` drives the `/sorted-users` ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Geographic coordinates, kept as the strings the upstream sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer of a user; `name` drives the `/Romaguera` selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A post record from `/posts`, owned by `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// A photo record from `/photos`; only ever paginated as an opaque sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// A todo accepted for creation; the id is assigned upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub completed: bool,
}

/// A created todo as returned by the upstream, id included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}
