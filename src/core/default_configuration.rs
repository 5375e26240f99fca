use std::env;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
};

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "apiUrl")]
    api_url : String,

    #[serde(rename = "dataDir")]
    data_dir: String,

    #[serde(rename = "logger")]
    logger  : Option<LogCfg>,
}

pub struct Builder<'a> {
    api_url     : Option<&'a str>,
    data_dir    : Option<String>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            api_url     : None,
            data_dir    : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_api_url(&mut self, url: &'a str) -> &mut Self {
        self.api_url = Some(url);
        self
    }

    pub fn with_data_dir(&mut self, input: &str) -> &mut Self {
        let mut data_dir = String::new();
        if input.starts_with("~") {
            data_dir += &env::var("HOME").unwrap_or_else(|_| ".".into());
            data_dir += &input[1..];
        } else {
            data_dir += input;
        }
        self.data_dir = Some(data_dir);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                api_url : String::new(),
                data_dir: env::var("HOME").unwrap_or_else(|_| ".".into()),
                logger  : None,
            }
        };

        if let Some(url) = b.api_url {
            cfg.api_url = url.to_string();
        }
        if cfg.api_url.is_empty() {
            return Err(Error::Argument("Missing GraphQL endpoint url".into()));
        }

        if let Some(dir) = b.data_dir.as_ref() {
            cfg.data_dir = dir.to_string();
        }

        if let Some(ref mut logger) = cfg.logger {
            logger.deserde_level = Some(
                logger.level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)
            );
        }
        if let Some(level) = b.log_level {
            cfg.logger = Some(LogCfg {
                level: level.to_string(),
                file: b.log_file.map(|v| v.to_string()),
                deserde_level: Some(level),
            });
        }

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("api_url: {}", self.api_url);
        println!("data_dir: {}", self.data_dir);
        println!("log_level: {}", self.log_level());
        println!("log_file: {}", self.log_file().unwrap_or("none"));
    }
}
