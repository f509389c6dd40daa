pub mod details_render;
