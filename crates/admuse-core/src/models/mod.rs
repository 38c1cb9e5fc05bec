pub mod ad_copy;
pub mod copy_source;
pub mod mascot;
pub mod product_brief;
