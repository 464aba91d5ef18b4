//! Builds the static posts of an affiliate review site and pads existing posts
//! with long-form copy, hero images and meta descriptions.

pub mod config;
pub mod logger;
pub mod catalog;
pub mod generator;
pub mod patcher;
pub mod post_list;
pub mod report;
pub mod text_utils;
pub mod view;
mod test_data;
