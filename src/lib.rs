pub mod config;
pub mod error;
pub mod pipeline;

pub mod data {
    pub mod loader;
    pub mod record;
    pub mod table;
}

pub mod metrics {
    pub mod runtime;
    pub mod summary;
}

pub mod plot {
    pub mod html;
    pub mod render;
    pub mod style;
    pub mod svg;
}
