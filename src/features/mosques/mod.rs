//! Nearby mosque discovery.
//!
//! Resolves a user coordinate into a distance-sorted list of mosques within a
//! search radius, serves the detail of a resolved mosque, and accepts new
//! mosque submissions for later verification.
//!
//! ## Data sources
//!
//! - `MockMosqueRepository`: deterministic generated data around the query point
//!   (used when `DATABASE_URL` is not set)
//! - `PgMosqueRepository`: published rows of the `mosques` table
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/mosques/nearby` | Mosques near `lat`/`lng`, nearest first |
//! | GET | `/api/mosques/nearby/{id}` | Detail of one mosque near `lat`/`lng` |
//! | POST | `/api/mosques/submissions` | Submit a new mosque |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod sinks;

pub use services::{NearbyMosqueResolver, SubmissionService};
