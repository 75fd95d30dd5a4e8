use crate::common::User;
use sleet::prelude::*;
use std::io::Write;

#[test]
fn builder_from_toml_config() {
    let config = SleetConfig::from_toml_str(
        r#"
        [sleet]
        dialect = "mssql"
        default_schema = "sales"
        alias_columns = false
        "#,
    )
    .unwrap();
    let stmt = Sleet::with_config(config).select::<User>().build().unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT [id], [user_name], [email], [age], [active] FROM [sales].[users]"
    );
}

#[test]
fn config_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sleet]\ndialect = \"postgres\"").unwrap();

    let sleet = Sleet::with_config(SleetConfig::from_file(file.path()).unwrap());
    assert_eq!(sleet.dialect(), Dialect::PostgreSQL);
    assert!(sleet.config().alias_columns);
}

#[test]
fn invalid_config_is_an_error() {
    assert!(SleetConfig::from_toml_str("[sleet]\ndialect = \"oracle\"").is_err());
    assert!(SleetConfig::from_toml_str("[sleet]\nunknown = 1").is_err());
    assert!(SleetConfig::from_toml_str("[sleet]\ndefault_schema = \"  \"").is_err());
}
