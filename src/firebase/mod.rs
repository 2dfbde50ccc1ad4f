//! Firebase backend clients
//!
//! Service-account credential loading, OAuth2 token exchange, and the two
//! REST clients used by the seeder: Firestore documents and Identity
//! Toolkit (Firebase Auth admin). Both authenticate with a bearer token
//! obtained from the shared [`TokenProvider`].

pub mod auth;
pub mod credentials;
pub mod firestore;
pub mod token;

pub use auth::IdentityToolkitClient;
pub use credentials::ServiceAccountKey;
pub use firestore::FirestoreClient;
pub use token::TokenProvider;
