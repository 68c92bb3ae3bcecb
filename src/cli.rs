//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::ui::{Language, Route};

#[derive(Debug, Parser)]
#[command(name = "inkpost", version, about = "Terminal client for the blog API")]
pub struct Cli {
    /// Path to the config file (default: <config dir>/inkpost/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Screen to open first: /, /login, /posts/<id> or /posts/<id>/edit
    #[arg(long, value_name = "ROUTE")]
    pub open: Option<String>,

    /// Remove the stored session and exit
    #[arg(long)]
    pub logout: bool,

    /// Interface language
    #[arg(long, value_enum)]
    pub lang: Option<Language>,
}

impl Cli {
    /// Apply flag overrides on top of file values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(lang) = self.lang {
            config.ui.language = lang;
        }
    }

    /// First screen to show. Defaults to the post list.
    pub fn initial_route(&self) -> Result<Route, String> {
        match &self.open {
            None => Ok(Route::Home),
            Some(path) => Route::parse(path).ok_or_else(|| format!("Unknown route '{path}'")),
        }
    }
}
