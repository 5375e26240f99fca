use log::LevelFilter;

pub trait Config: Send + Sync {
    fn api_url(&self) -> &str;
    fn data_dir(&self) -> &str;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
