pub mod github;
pub mod http;

#[cfg(test)]
pub(crate) mod test_server;
