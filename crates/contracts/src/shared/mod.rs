pub mod display_item;
