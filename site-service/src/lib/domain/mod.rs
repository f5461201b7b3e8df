pub mod booking;
pub mod catalog;
pub mod contact;
pub mod errors;
pub mod gallery;
pub mod review;
pub mod slider;
pub mod user;
