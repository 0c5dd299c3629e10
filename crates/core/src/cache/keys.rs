//! Fixed cache key names.
//!
//! Every cached query uses one well-known key, so repeated logical queries
//! share a single upstream fetch inside the TTL window.

/// Raw, unsliced photo collection.
pub const IMAGES: &str = "images";

/// Featured user together with their posts.
pub const NICHOLAS: &str = "nicholas";

/// Posts of users working at matching companies.
pub const ROMAGUERA: &str = "Romaguera";

/// City-sorted, domain-filtered user list.
pub const SORTED_USERS: &str = "sorted-users";

/// Accumulated todos created through this process; never expires.
pub const NEW_TODOS: &str = "newTodos";
