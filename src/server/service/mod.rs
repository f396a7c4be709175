pub mod document;
pub mod oauth;
