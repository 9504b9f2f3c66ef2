use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
pub enum AppErrorCode {
    Unknown,
    NotImplemented,
    MissingSysBasePath,
    MissingAppBasePath,
    MissingConfigPath,
    MissingDataStore,
    InvalidJsonFormat,
    MissingAliasLogHdlerCfg,
    MissingAliasLoggerCfg,
    NoLogHandlerCfg,
    NoLoggerCfg,
    NoHandlerInLoggerCfg,
    InvalidHandlerLoggerCfg,
    InvalidInput,
    NoDatabaseCfg,
    ExceedingMaxLimit,
    AcquireLockFailure,
    DataTableNotExist,
    DataCorruption,
    ProductNotExist,
    IOerror(ErrorKind),
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub code: AppErrorCode,
    pub detail: Option<String>,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let default = "none".to_string();
        let dp = self.detail.as_ref().unwrap_or(&default);
        write!(f, "code:{:?}, detail:{}", self.code, dp)
    }
}
