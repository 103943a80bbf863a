pub use super::account::Entity as Account;
pub use super::cart_entry::Entity as CartEntry;
pub use super::class_offering::Entity as ClassOffering;
pub use super::enrollment::Entity as Enrollment;
