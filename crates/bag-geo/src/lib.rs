//! `bag-geo` — geographic coordinates and spherical distance.
//!
//! A single value type, [`GeoPoint`], carrying two independent distance
//! algorithms: a haversine great-circle distance and a legacy cosine-law
//! distance.  Both are pure, total functions over finite `f64` coordinates;
//! this crate has no error type and no I/O.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;


pub use geo::GeoPoint;
