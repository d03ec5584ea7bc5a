use std::fmt::{self, Display};

/// Validated per-invocation connection overrides.
///
/// Built fresh from the property tokens of each connect command and
/// discarded once the attempt is dispatched. `port` of 0 means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    pub server: Option<String>,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// Malformed property grammar; the caller pairs this with its usage text.
    Usage,
    /// Port value that is not a number, echoed exactly as given.
    BadNumber(String),
    /// Port value that parsed but falls outside [1, 65535].
    OutOfRange(i64),
}

impl Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Usage => write!(f, "Malformed connection properties."),
            ParamError::BadNumber(value) => {
                write!(f, "Could not convert \"{}\" to a number.", value)
            }
            ParamError::OutOfRange(n) => {
                write!(f, "Value {} out of range. Must be in 1..65535.", n)
            }
        }
    }
}

impl ConnectionParams {
    /// Parse the property tokens that follow the connect target.
    ///
    /// Grammar: zero or more `server <value>` / `port <value>` pairs in any
    /// order, each property at most once. A keyword without a value, an
    /// unknown keyword, or a repeated property is a grammar error; port
    /// values get the dedicated number/range errors.
    pub fn parse(tokens: &[&str]) -> Result<Self, ParamError> {
        let mut params = ConnectionParams::default();
        let mut rest = tokens;
        while let [keyword, value, tail @ ..] = rest {
            match *keyword {
                "server" if params.server.is_none() => {
                    params.server = Some((*value).to_string());
                }
                "port" if params.port == 0 => {
                    params.port = parse_port(value)?;
                }
                _ => return Err(ParamError::Usage),
            }
            rest = tail;
        }
        if rest.is_empty() {
            Ok(params)
        } else {
            // trailing keyword with no value
            Err(ParamError::Usage)
        }
    }
}

fn parse_port(value: &str) -> Result<u16, ParamError> {
    let n: i64 = value
        .parse()
        .map_err(|_| ParamError::BadNumber(value.to_string()))?;
    if (1..=65535).contains(&n) {
        Ok(n as u16)
    } else {
        Err(ParamError::OutOfRange(n))
    }
}
