use std::collections::HashMap;

use product::constant::{env_vars, hard_limit};
use product::error::{AppError, AppErrorCode};
use product::{AppCfgHardLimit, AppCfgInitArgs, AppConfig, AppDataStoreCfg};

use crate::{ut_service_basepath, EXAMPLE_REL_PATH};

fn ut_limit() -> AppCfgHardLimit {
    AppCfgHardLimit {
        nitems_per_inmem_table: hard_limit::MAX_ITEMS_STORED_PER_MODEL,
    }
}

#[test]
fn cfg_extract_arg_ok() {
    let args = [
        (
            env_vars::CFG_FILEPATH.to_string(),
            "relative/to/mycfg.json".to_string(),
        ),
        (env_vars::SYS_BASEPATH.to_string(), "/path/sys".to_string()),
        (
            env_vars::SERVICE_BASEPATH.to_string(),
            "/path/service".to_string(),
        ),
    ];
    let args = AppCfgInitArgs {
        env_var_map: HashMap::from(args),
        limit: ut_limit(),
    };
    let result = AppConfig::new(args);
    assert_eq!(result.is_err(), true);
    let err = result.err().unwrap();
    // it is normal to get File Not Found error, I don't really assign valid file paths.
    assert_eq!(err.code, AppErrorCode::IOerror(std::io::ErrorKind::NotFound));
}

#[test]
fn cfg_extract_arg_missing_sys_path() {
    let args = AppCfgInitArgs {
        env_var_map: HashMap::new(),
        limit: ut_limit(),
    };
    let result = AppConfig::new(args);
    assert_eq!(result.is_err(), true);
    let err = result.err().unwrap();
    assert_eq!(err.code, AppErrorCode::MissingSysBasePath);
}

#[test]
fn cfg_extract_arg_missing_service_path() {
    let args = [(env_vars::SYS_BASEPATH.to_string(), "/path/sys".to_string())];
    let args = AppCfgInitArgs {
        env_var_map: HashMap::from(args),
        limit: ut_limit(),
    };
    let result = AppConfig::new(args);
    assert_eq!(result.is_err(), true);
    let err = result.err().unwrap();
    assert_eq!(err.code, AppErrorCode::MissingAppBasePath);
}

#[test]
fn cfg_extract_arg_missing_cfg_path() {
    let args = [
        (env_vars::SYS_BASEPATH.to_string(), "/path/sys".to_string()),
        (
            env_vars::SERVICE_BASEPATH.to_string(),
            "/path/service".to_string(),
        ),
    ];
    let args = AppCfgInitArgs {
        env_var_map: HashMap::from(args),
        limit: ut_limit(),
    };
    let result = AppConfig::new(args);
    assert_eq!(result.is_err(), true);
    let err = result.err().unwrap();
    assert_eq!(err.code, AppErrorCode::MissingConfigPath);
}

#[test]
fn parse_ext_cfg_file_ok() {
    let service_basepath = ut_service_basepath();
    const CFG_FILEPATH: &str = "config_ok.json";
    let fullpath = service_basepath + EXAMPLE_REL_PATH + CFG_FILEPATH;
    let result = AppConfig::parse_from_file(fullpath, ut_limit());
    assert_eq!(result.is_ok(), true);
    let actual = result.unwrap();
    assert_eq!(actual.logging.handlers.is_empty(), false);
    assert_eq!(actual.logging.loggers.is_empty(), false);
    assert_eq!(actual.data_store.is_empty(), false);
    for loghdlr in actual.logging.handlers.iter() {
        assert_eq!(loghdlr.alias.is_empty(), false);
    }
    for logger in actual.logging.loggers.iter() {
        assert_eq!(logger.alias.is_empty(), false);
        assert_eq!(logger.handlers.is_empty(), false);
    }
    for ds in actual.data_store.iter() {
        let AppDataStoreCfg::InMemory(c) = ds;
        assert_eq!(c.alias.is_empty(), false);
        assert!(c.max_items > 0);
    }
}

fn _parse_ext_cfg_file_error_common(cfg_filepath: &str, expect_err: AppErrorCode) -> AppError {
    let service_basepath = ut_service_basepath();
    let fullpath = service_basepath + EXAMPLE_REL_PATH + cfg_filepath;
    let result = AppConfig::parse_from_file(fullpath, ut_limit());
    assert_eq!(result.is_err(), true);
    let err = result.err().unwrap();
    assert_eq!(err.code, expect_err);
    err
}

#[test]
fn parse_ext_cfg_file_missing_fields() {
    _parse_ext_cfg_file_error_common(
        "config_missing_logging.json",
        AppErrorCode::InvalidJsonFormat,
    );
}

#[test]
fn parse_ext_cfg_file_log_invalid_fields() {
    _parse_ext_cfg_file_error_common("config_log_no_handler.json", AppErrorCode::NoLogHandlerCfg);
    _parse_ext_cfg_file_error_common("config_log_no_logger.json", AppErrorCode::NoLoggerCfg);
    _parse_ext_cfg_file_error_common(
        "config_logger_without_handler.json",
        AppErrorCode::NoHandlerInLoggerCfg,
    );
    _parse_ext_cfg_file_error_common(
        "config_logger_with_nonexist_handler.json",
        AppErrorCode::InvalidHandlerLoggerCfg,
    );
}

#[test]
fn parse_ext_cfg_file_dstore_invalid_fields() {
    _parse_ext_cfg_file_error_common("config_dstore_empty.json", AppErrorCode::NoDatabaseCfg);
    _parse_ext_cfg_file_error_common(
        "config_dstore_inmem_exceed_max_items.json",
        AppErrorCode::ExceedingMaxLimit,
    );
}
