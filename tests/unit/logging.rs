use serde_json::{from_value as json_from_value, json};
use std::fs::{remove_file, File};

use product::logging::{AppLogContext, AppLogLevel};
use product::{to_3rdparty_level, AppBasepathCfg, AppLoggingCfg};

use crate::{ut_service_basepath, ut_sys_basepath};

#[test]
fn init_log_context_ok() {
    let sys_path = ut_sys_basepath();
    let app_path = ut_service_basepath();
    // ---- setup
    let basepath = AppBasepathCfg {
        system: sys_path.clone(),
        service: app_path,
    };
    let log_file_path = "tmp/log/test/product_unit_test.log";
    let logger_keys = ["should-be-module-path", "another-module-hier"];
    let cfg = {
        let val = json!({
            "handlers" : [
                {"alias": "errlog-file-456", "min_level": "WARNING",
                 "path": log_file_path,  "destination": "localfs"},
                {"alias": "std-output-123",  "min_level": "ERROR",
                 "destination": "console"}
            ],
            "loggers" : [
                {"alias": logger_keys[0],
                 "handlers": ["errlog-file-456", "std-output-123"],
                 "level": "INFO"},
                {"alias": logger_keys[1],
                 "handlers": ["errlog-file-456"] }
            ]
        });
        json_from_value::<AppLoggingCfg>(val).unwrap()
    };
    let actual = AppLogContext::new(&basepath, &cfg);
    for key in logger_keys {
        let result = actual.get_assigner(key);
        assert_eq!(result.is_some(), true);
        let logger = result.unwrap();
        tracing::dispatcher::with_default(logger, || {
            const LVL: tracing::Level = to_3rdparty_level!(AppLogLevel::ERROR);
            tracing::event!(LVL, "invoked by unit test");
        });
    }
    {
        let fullpath = sys_path + "/" + log_file_path;
        let result = File::open(fullpath.clone());
        assert_eq!(result.is_ok(), true);
        let f = result.unwrap();
        drop(f);
        let result = remove_file(fullpath);
        assert_eq!(result.is_ok(), true);
    }
} // end of init_log_context_ok
