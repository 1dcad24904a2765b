pub mod model;

pub use model::{Binding, Cell, Document, Layer, Layout, Param, Span};
