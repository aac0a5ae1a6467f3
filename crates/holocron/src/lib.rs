//! Holocron — Star Wars reference catalog
//!
//! Catalog data model, per-category field sets, and navigation routes.
//!
//! ## Quick start
//!
//! ```
//! use holocron::catalog::Category;
//! use holocron::route::Route;
//!
//! let route = Route::parse("/detail/people/1");
//! assert_eq!(route, Route::detail(Category::People, "1"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod route;
