pub mod api;
pub mod csv;
pub mod grouping;
pub mod live;
pub mod model;
pub mod normalize;
pub mod sample;
pub mod time;
