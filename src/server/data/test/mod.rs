mod connection;
mod document;
