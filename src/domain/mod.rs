pub mod contact;
pub mod listing;

pub use contact::Contact;
pub use listing::{Listing, SellerType};
