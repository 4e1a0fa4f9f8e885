pub use tabula_core::driver::{
    Connection, Driver, Operation, Response, Row, Rows, Transaction,
};

#[cfg(feature = "sqlite")]
pub use tabula_driver_sqlite::Sqlite;

use tabula_core::{Error, Result};
use url::Url;

/// Selects a built-in driver from a connection URL.
#[derive(Debug)]
pub struct Connect {
    url: Url,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Driver for Connect {
    fn connect(&self) -> Result<Box<dyn Connection>> {
        match self.url.scheme() {
            "sqlite" => connect_sqlite(&self.url),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={}",
                self.url
            ))),
        }
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    tabula_driver_sqlite::Sqlite::new(url.as_str())?.connect()
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url(format!(
        "`sqlite` feature not enabled; url={url}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        assert!(Connect::new("not a url").unwrap_err().is_invalid_connection_url());
    }

    #[test]
    fn rejects_unknown_scheme() {
        let connect = Connect::new("mysql://localhost/db").unwrap();
        assert_eq!(connect.url().scheme(), "mysql");
        assert!(connect.connect().unwrap_err().is_invalid_connection_url());
    }
}
