//! Property tests for adapter command builders.

use proptest::prelude::*;

use devsync::domain::entities::DatabaseConfig;
use devsync::domain::services::AdapterRegistry;
use devsync::domain::value_objects::TableFilter;

fn field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9_./ -]{0,12}")
}

fn config(adapter: &'static str) -> impl Strategy<Value = DatabaseConfig> {
    (field(), field(), "[a-z_]{1,12}", field(), field()).prop_map(
        move |(user, pass, dbname, socket, host)| DatabaseConfig {
            adapter: adapter.to_string(),
            user,
            pass,
            dbname,
            socket,
            host,
        },
    )
}

fn any_config() -> impl Strategy<Value = DatabaseConfig> {
    prop_oneof![config("postgresql"), config("mysql2")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Builders are deterministic functions of the config record.
    #[test]
    fn property_builders_are_deterministic(
        config in any_config(),
        tables in "[a-z_ ]{0,20}",
    ) {
        let registry = AdapterRegistry::with_builtin();
        let dump = registry.dump_builder(&config.adapter).unwrap();
        let load = registry.load_builder(&config.adapter).unwrap();
        let filter = TableFilter::parse(&tables);

        prop_assert_eq!(dump(&config, &filter), dump(&config.clone(), &filter));
        prop_assert_eq!(load(&config), load(&config.clone()));
    }

    /// PROPERTY: The postgresql dump never carries a password.
    #[test]
    fn property_pg_dump_never_has_password(config in config("postgresql")) {
        let registry = AdapterRegistry::with_builtin();
        let cmd = registry.dump_builder("postgresql").unwrap()(&config, &TableFilter::all());

        prop_assert!(!cmd.contains("--password"));
        prop_assert!(
            cmd.starts_with("pg_dump --no-owner --no-privileges --disable-triggers --inserts")
        );
        prop_assert!(cmd.ends_with(config.dbname.as_str()));
    }

    /// PROPERTY: The mysql load never carries a password.
    #[test]
    fn property_mysql_load_never_has_password(config in config("mysql2")) {
        let registry = AdapterRegistry::with_builtin();
        let cmd = registry.load_builder("mysql2").unwrap()(&config);

        prop_assert!(!cmd.contains("--password"));
    }

    /// PROPERTY: Optional flags appear exactly when the field is non-empty.
    #[test]
    fn property_flags_follow_field_presence(config in config("mysql2")) {
        let registry = AdapterRegistry::with_builtin();
        let cmd = registry.dump_builder("mysql2").unwrap()(&config, &TableFilter::all());

        prop_assert_eq!(cmd.contains(" --user="), config.user().is_some());
        prop_assert_eq!(cmd.contains(" --password="), config.pass().is_some());
        prop_assert_eq!(cmd.contains(" --socket="), config.socket().is_some());
        prop_assert_eq!(cmd.contains(" --host="), config.host().is_some());
    }
}
