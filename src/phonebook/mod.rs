pub mod contact;
pub mod draft;
pub mod validation;
pub mod favorites;
pub mod partition;
pub mod pagination;
pub mod filter;
pub mod persistence;
pub mod api_client;
pub mod session;

#[cfg(test)]
mod unitests;
