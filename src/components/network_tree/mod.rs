mod component;

pub use component::NetworkTree;
