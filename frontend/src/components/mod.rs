pub mod back_to_top;
pub mod contact;
pub mod header;
pub mod products;
pub mod testimonials;
