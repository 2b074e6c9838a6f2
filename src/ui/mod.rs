pub mod chart;
pub mod hundreds;
pub mod number_line;
pub mod panels;
pub mod whiteboard;
pub mod words;
