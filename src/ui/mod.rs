/// UI module exports

mod adapter;
mod bridge;
pub mod popup;
