pub mod headers;
pub mod html;
pub mod text;
