#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validate(_))
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_fails(code: u16) -> Result<()> {
        bail!("unexpected status {}", code);
    }

    #[test]
    fn test_bail_builds_server_error() {
        let err = always_fails(502).unwrap_err();
        assert!(matches!(err, Error::Server(ref msg) if msg == "unexpected status 502"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_errors_convert() {
        let err: Error = validator::ValidationErrors::new().into();
        assert!(err.is_validation());
    }
}
