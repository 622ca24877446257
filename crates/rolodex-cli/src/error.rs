use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn store_exit_code(err: &StoreError) -> u8 {
    if err.is_corrupt_data() || err.kind() == StoreErrorKind::InvalidDataPath {
        EXIT_INVALID_INPUT
    } else {
        EXIT_FAILURE
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidBookPath(_)
        | ConfigError::EmptyPrompt
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status_for, EXIT_FAILURE, EXIT_INVALID_INPUT};
    use anyhow::{anyhow, Context as _};
    use rolodex_config::ConfigError;
    use rolodex_store::error::StoreError;
    use std::path::PathBuf;

    #[test]
    fn corrupt_book_is_invalid_input() {
        let err = Err::<(), _>(StoreError::UnrecognizedFile(PathBuf::from("x")))
            .context("load address book")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn io_failures_are_not_blamed_on_the_book() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = anyhow::Error::new(StoreError::Io(io)).context("save address book");
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn newer_book_is_invalid_input() {
        let err = anyhow::Error::new(StoreError::Migration("too new".to_string()))
            .context("load address book");
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn config_errors_map_to_invalid_input() {
        let err = anyhow::Error::new(ConfigError::EmptyPrompt).context("load config");
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn unknown_errors_are_failures() {
        let err = anyhow!("boom");
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }
}
