pub mod auth;
pub mod author;
pub mod book;
pub mod home;

#[cfg(test)]
mod test;
