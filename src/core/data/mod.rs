pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod point;
pub mod raster_buffer;
pub mod render_config;
pub mod viewport;
