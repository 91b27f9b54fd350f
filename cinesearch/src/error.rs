use derive_more::{Display, From};
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

// NOTE:
// - Error must implement Debug to be used as E in fn main() -> Result<(), E>
// - Error must implement Display for Any::warn() and Any::error()
// - Error must be Send so search and comment tasks can carry it across await points
#[derive(Debug, Display, From)]
pub enum Error {
    Io(IoError),
    Reqwest(ReqwestError),
    SerdeJson(SerdeJsonError),
    SerdeYaml(SerdeYamlError),
    UrlParse(UrlParseError),

    #[display(fmt = "no movie id on {_0} and none configured")]
    #[from(ignore)]
    MissingMovieId(String),
}
