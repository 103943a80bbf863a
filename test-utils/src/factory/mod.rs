//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! straight through SeaORM active models, bypassing the application's repositories.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let instructor = factory::account::create_instructor(&db).await?;
//! let class = factory::class_offering::create_class(&db, &instructor.email).await?;
//!
//! // Or everything a checkout needs in one call
//! let (student, class, cart_entry) = factory::helpers::create_cart_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let class = factory::class_offering::ClassOfferingFactory::new(&db, &instructor.email)
//!     .title("Night Photography")
//!     .seats(1)
//!     .status("approved")
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod cart_entry;
pub mod class_offering;
pub mod helpers;

pub use account::{create_account, create_admin, create_instructor};
pub use cart_entry::create_cart_entry;
pub use class_offering::create_class;
