//! Reusable database config documents

pub const REMOTE_DATABASE_YML: &str = r#"
default: &default
  adapter: postgresql
  pool: 5

production:
  <<: *default
  database: shop_production
  username: shop
  host: db1
"#;

pub const LOCAL_DATABASE_YML: &str = r#"
development:
  adapter: postgresql
  database: shop_development
"#;

pub const ORACLE_DATABASE_YML: &str = r#"
production:
  adapter: oracle
  database: shop_production
"#;

pub const MYSQL_DATABASE_YML: &str = r#"
production:
  adapter: mysql2
  database: shop_production
  username: shop
"#;

pub const LOCAL_TEST_DATABASE_YML: &str = r#"
development:
  adapter: postgresql
  database: shop_development

test:
  adapter: postgresql
  database: shop_test
"#;
