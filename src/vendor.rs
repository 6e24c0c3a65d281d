use std::fmt;

/// Database product family, derived from the product name a backend reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vendor {
    Oracle,
    MySql,
    MsSql,
    Postgres,
    Sqlite,
    Other(String),
}

impl Vendor {
    /// Classify a product name such as `"Microsoft SQL Server 2019 ..."` or `"Oracle"`.
    #[must_use]
    pub fn from_product_name(product: &str) -> Self {
        let lower = product.to_ascii_lowercase();
        if lower.contains("oracle") {
            Vendor::Oracle
        } else if lower.contains("mysql") || lower.contains("mariadb") {
            Vendor::MySql
        } else if lower.contains("microsoft") || lower.contains("sql server") {
            Vendor::MsSql
        } else if lower.contains("postgres") {
            Vendor::Postgres
        } else if lower.contains("sqlite") {
            Vendor::Sqlite
        } else {
            Vendor::Other(product.trim().to_string())
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::Oracle => f.write_str("Oracle"),
            Vendor::MySql => f.write_str("MySQL"),
            Vendor::MsSql => f.write_str("Microsoft SQL Server"),
            Vendor::Postgres => f.write_str("PostgreSQL"),
            Vendor::Sqlite => f.write_str("SQLite"),
            Vendor::Other(name) => f.write_str(name),
        }
    }
}
