pub mod contact;
pub mod filter;
pub mod menu;
pub mod scroll;
pub mod testimonials;
pub mod viewport;
