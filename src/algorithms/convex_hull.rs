pub mod gift_wrapping;
